use chrono::Local;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as shown in action confirmations.
pub fn now_display() -> String {
    Local::now().format(DISPLAY_FORMAT).to_string()
}
