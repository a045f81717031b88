use crate::utils::error::{CaddieError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Inclusive range check. `message` is the caller-facing error text, kept
/// per-field so reports read like "Wind speed must be 0-100 mph" rather than
/// a generic bounds complaint.
pub fn validate_range(value: i32, min: i32, max: i32, message: &str) -> Result<()> {
    if value < min || value > max {
        return Err(CaddieError::Validation {
            message: message.to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CaddieError::MissingField {
        field: field_name.to_string(),
    })
}

/// A present-but-empty string counts as missing, same as an absent field.
pub fn validate_required_str<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    let s = validate_required_field(field_name, value)?;
    if s.trim().is_empty() {
        return Err(CaddieError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(s)
}
