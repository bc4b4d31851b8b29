//! JSON output formatting for datewise.
//!
//! Every payload is pretty-printed so scripts and agents can read it
//! directly.

use serde::Serialize;

use crate::error::DatewiseError;
use crate::info::{MonthCalendar, RelativeInfo, WeekdayInfo};
use crate::resolver::ResolutionResult;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DatewiseError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a resolution as JSON
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if serialization fails.
pub fn format_resolution_json(result: &ResolutionResult) -> Result<String, DatewiseError> {
    to_json(result)
}

/// Format weekday facts as JSON
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if serialization fails.
pub fn format_weekday_json(info: &WeekdayInfo) -> Result<String, DatewiseError> {
    to_json(info)
}

/// Format a relative description as JSON
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if serialization fails.
pub fn format_relative_json(info: &RelativeInfo) -> Result<String, DatewiseError> {
    to_json(info)
}

/// Format a month calendar as JSON
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if serialization fails.
pub fn format_calendar_json(calendar: &MonthCalendar) -> Result<String, DatewiseError> {
    to_json(calendar)
}

/// Format an error as `{"error": "..."}`.
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if serialization fails.
pub fn format_error_json(err: &DatewiseError) -> Result<String, DatewiseError> {
    to_json(&err.to_report())
}
