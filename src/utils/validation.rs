use validator::{Validate, ValidationErrors};
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(describe_errors)
}

/// Flattens field errors into `field: [code: message]; ...`.
fn describe_errors(err: ValidationErrors) -> AppError {
    let mut details = err.field_errors()
        .iter()
        .map(|(field, errs)| {
            let errors = errs.iter()
                .map(|e| format!("{}: {}", e.code, e.message.as_deref().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect::<Vec<_>>();
    details.sort();
    AppError::BadRequest(format!("Validation failed: {}", details.join("; ")))
}
