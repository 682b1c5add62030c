use crate::utils::error::{LocationError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Inclusive range check. NaN is never in range.
pub fn validate_range(field_name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(LocationError::OutOfRange {
            field: field_name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LocationError::NonFinite {
            field: field_name,
            value,
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LocationError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LocationError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LocationError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
