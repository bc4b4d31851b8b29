//! Weekday lookup for a concrete date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{is_weekend, parse_iso_date, weekday_name};
use crate::error::DatewiseError;

/// Weekday facts about a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayInfo {
    pub date: NaiveDate,
    pub day_of_week: String,
    /// Zero-based, Monday = 0.
    pub day_number: u32,
    pub is_weekend: bool,
    pub is_weekday: bool,
}

impl WeekdayInfo {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let weekend = is_weekend(date);
        Self {
            date,
            day_of_week: weekday_name(date.weekday()).to_string(),
            day_number: date.weekday().num_days_from_monday(),
            is_weekend: weekend,
            is_weekday: !weekend,
        }
    }
}

/// Look up the weekday of a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns `DatewiseError::InvalidInputFormat` if the string is not a valid date.
pub fn get_weekday(date_str: &str) -> Result<WeekdayInfo, DatewiseError> {
    parse_iso_date(date_str).map(WeekdayInfo::for_date)
}
