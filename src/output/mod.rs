//! Output formatting for datewise.
//!
//! Every command result can be shown as colored text or pretty JSON.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::DatewiseError;
use crate::info::{MonthCalendar, RelativeInfo, WeekdayInfo};
use crate::resolver::ResolutionResult;

pub use json::*;
pub use pretty::*;

/// Format a resolution based on output format
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if JSON serialization fails.
pub fn format_resolution(
    result: &ResolutionResult,
    format: OutputFormat,
) -> Result<String, DatewiseError> {
    match format {
        OutputFormat::Pretty => Ok(format_resolution_pretty(result)),
        OutputFormat::Json => format_resolution_json(result),
    }
}

/// Format weekday facts based on output format
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if JSON serialization fails.
pub fn format_weekday(info: &WeekdayInfo, format: OutputFormat) -> Result<String, DatewiseError> {
    match format {
        OutputFormat::Pretty => Ok(format_weekday_pretty(info)),
        OutputFormat::Json => format_weekday_json(info),
    }
}

/// Format a relative description based on output format
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if JSON serialization fails.
pub fn format_relative(info: &RelativeInfo, format: OutputFormat) -> Result<String, DatewiseError> {
    match format {
        OutputFormat::Pretty => Ok(format_relative_pretty(info)),
        OutputFormat::Json => format_relative_json(info),
    }
}

/// Format a month calendar based on output format. `highlight` only
/// affects pretty output.
///
/// # Errors
///
/// Returns `DatewiseError::Serialization` if JSON serialization fails.
pub fn format_calendar(
    calendar: &MonthCalendar,
    highlight: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<String, DatewiseError> {
    match format {
        OutputFormat::Pretty => Ok(format_calendar_pretty(calendar, highlight)),
        OutputFormat::Json => format_calendar_json(calendar),
    }
}
