//! Field-level validation rules shared by the entity schemas.
//!
//! Rules are pure and synchronous. A rejection carries a short human-readable
//! reason which the presentation layer surfaces verbatim next to the form, so
//! the messages here are user-facing text, not developer diagnostics.

use thiserror::Error;

/// A draft field was rejected before any network call was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be {min}-{max} characters")]
    OutsideLengthRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must be a valid number")]
    NotNumeric { field: &'static str },
}

/// Trims `raw` and rejects it if nothing remains.
pub fn required_trimmed(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Rejects an empty value. Unlike [`required_trimmed`] the input is kept
/// verbatim; foreign-key selections are forwarded to the server as-is.
pub fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(raw.to_string())
}

/// Rejects `value` when it is longer than `max` characters.
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Rejects `value` when its length falls outside `min..=max` characters.
pub fn length_range(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::OutsideLengthRange { field, min, max });
    }
    Ok(())
}

/// Rejects `value` unless the whole string parses as a finite number.
///
/// `"12.5"` and `"1e3"` pass; `""`, `"-"`, `"abc"`, `"1.2.3"`, `"inf"` and
/// `"NaN"` are rejected.
pub fn finite_number(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let parsed = value.trim().parse::<f64>();
    match parsed {
        Ok(number) if number.is_finite() => Ok(()),
        _ => Err(ValidationError::NotNumeric { field }),
    }
}
