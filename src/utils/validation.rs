use validator::{Validate, ValidationErrors};
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::Config(format!("Validation failed: {}", describe(&err))))
}

/// Renders every failing field as `field: [code: message]`, sorted by field name.
pub fn describe(err: &ValidationErrors) -> String {
    let mut fields = err.field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let errors = errs.iter()
                .map(|e| format!("{}: {}", e.code, e.message.as_deref().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect::<Vec<_>>();
    fields.sort();
    fields.join("; ")
}
