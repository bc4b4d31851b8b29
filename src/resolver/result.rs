//! Structured resolution results.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::grammar::Resolution;
use crate::core::weekday_name;

/// Warning attached when time-of-day information was dropped.
pub const TIME_IGNORED_WARNING: &str = "Time component detected but ignored (date-only resolver)";

/// Substrings that indicate the raw input carried a time of day.
const TIME_MARKERS: [&str; 6] = ["at ", " am", " pm", "noon", "midnight", "o'clock"];

/// A resolved date expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The resolved calendar date (serialized as `YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Weekday name of `date` ("Wednesday").
    pub day_of_week: String,
    /// The original input, verbatim.
    pub expression: String,
    /// Human description of what the expression meant.
    pub description: String,
    /// Whole days from the reference date to `date`.
    pub days_from_today: i64,
    /// Present when time-of-day information was ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ResolutionResult {
    /// Assemble a result from a grammar match.
    ///
    /// `had_time_suffix` comes from the normalizer; the raw expression is
    /// also scanned for leftover time markers.
    #[must_use]
    pub fn build(
        resolution: Resolution,
        expression: &str,
        reference: NaiveDate,
        had_time_suffix: bool,
    ) -> Self {
        let warning = (had_time_suffix || has_time_marker(expression))
            .then(|| TIME_IGNORED_WARNING.to_string());

        Self {
            day_of_week: weekday_name(resolution.date.weekday()).to_string(),
            days_from_today: (resolution.date - reference).num_days(),
            date: resolution.date,
            expression: expression.to_string(),
            description: resolution.description,
            warning,
        }
    }

    /// The date as an ISO 8601 string.
    #[must_use]
    pub fn iso_date(&self) -> String {
        crate::core::to_iso_date(self.date)
    }
}

fn has_time_marker(expression: &str) -> bool {
    let lowered = expression.trim().to_lowercase();
    TIME_MARKERS.iter().any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_derives_fields() {
        let result = ResolutionResult::build(
            Resolution::new(date(2026, 2, 11), "next wednesday"),
            "Next Wednesday",
            date(2026, 2, 8),
            false,
        );
        assert_eq!(result.day_of_week, "Wednesday");
        assert_eq!(result.days_from_today, 3);
        assert_eq!(result.expression, "Next Wednesday");
        assert_eq!(result.iso_date(), "2026-02-11");
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_negative_offset() {
        let result = ResolutionResult::build(
            Resolution::new(date(2026, 2, 3), "5 day(s) ago"),
            "5 days ago",
            date(2026, 2, 8),
            false,
        );
        assert_eq!(result.days_from_today, -5);
    }

    #[test]
    fn test_warning_from_suffix() {
        let result = ResolutionResult::build(
            Resolution::new(date(2026, 2, 9), "tomorrow"),
            "tomorrow morning",
            date(2026, 2, 8),
            true,
        );
        assert_eq!(result.warning.as_deref(), Some(TIME_IGNORED_WARNING));
    }

    #[test]
    fn test_warning_from_residual_marker() {
        assert!(has_time_marker("tomorrow at noon"));
        assert!(has_time_marker("friday 5 PM"));
        assert!(has_time_marker("midnight tomorrow"));
        assert!(has_time_marker("monday 9 o'clock"));
        assert!(!has_time_marker("next saturday"));
        assert!(!has_time_marker("in 3 days"));
    }

    #[test]
    fn test_serializes_iso_date_and_skips_empty_warning() {
        let result = ResolutionResult::build(
            Resolution::new(date(2026, 2, 10), "day after tomorrow"),
            "day after tomorrow",
            date(2026, 2, 8),
            false,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["date"], "2026-02-10");
        assert_eq!(json["day_of_week"], "Tuesday");
        assert_eq!(json["days_from_today"], 2);
        assert!(json.get("warning").is_none());
    }
}
