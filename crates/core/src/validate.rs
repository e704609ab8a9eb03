//! Input validation helpers shared by the repositories.
//!
//! Request DTOs keep their fields `Option` so a missing key surfaces as a
//! validation outcome instead of a deserialization rejection; these
//! helpers perform the presence and shape checks once, before anything
//! touches the store.

use crate::error::CoreError;
use crate::types::{CalendarDate, DATE_FORMAT};

/// Require a text field to be present and non-empty.
///
/// Whitespace-only values count as empty. The original value is returned
/// untrimmed.
pub fn required_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        Some(_) => Err(CoreError::Validation(format!(
            "{field} must not be empty"
        ))),
        None => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Like [`required_text`], but a missing field passes through as `None`.
pub fn optional_text(field: &str, value: Option<&str>) -> Result<Option<String>, CoreError> {
    value.map(|v| required_text(field, Some(v))).transpose()
}

/// Parse a calendar date in the fixed `YYYY-MM-DD` form.
pub fn parse_date(field: &str, value: &str) -> Result<CalendarDate, CoreError> {
    CalendarDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("{field} must be a date in YYYY-MM-DD form"))
    })
}

/// Like [`parse_date`], but a missing field passes through as `None`.
pub fn optional_date(field: &str, value: Option<&str>) -> Result<Option<CalendarDate>, CoreError> {
    value.map(|v| parse_date(field, v)).transpose()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
