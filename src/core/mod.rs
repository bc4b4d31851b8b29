//! Core calendar utilities for datewise.
//!
//! This module provides the date arithmetic and name tables shared by the
//! resolver and the auxiliary date commands.

pub mod calendar;
pub mod names;

pub use calendar::{
    add_business_days, add_days, add_months, add_weeks, add_years, business_days_between,
    days_in_month, is_weekend, last_day_of_month, next_business_day, next_weekday,
    nth_weekday_after, previous_weekday, start_of_week,
};
pub use names::{lookup_month, lookup_weekday, lookup_weekday_plural, month_name, weekday_name};

use chrono::NaiveDate;

use crate::error::DatewiseError;

/// Parse a strict `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns `DatewiseError::InvalidInputFormat` if the string is not a valid
/// calendar date in ISO form.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DatewiseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DatewiseError::InvalidInputFormat(input.to_string()))
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2026-02-08").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()
        );
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert!(matches!(
            parse_iso_date("feb 8"),
            Err(DatewiseError::InvalidInputFormat(_))
        ));
        assert!(parse_iso_date("2026-02-30").is_err());
    }

    #[test]
    fn test_to_iso_date_pads() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(to_iso_date(date), "2026-03-05");
    }
}
