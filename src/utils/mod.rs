pub mod timestamp;
pub mod validation;
