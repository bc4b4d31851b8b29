//! Describe a date relative to a reference day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{business_days_between, parse_iso_date, weekday_name};
use crate::error::DatewiseError;

/// How a date relates to the reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeInfo {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub days_from_today: i64,
    /// Business days between the two dates, negative for past dates.
    pub business_days: i64,
    pub human_readable: String,
}

/// Describe the `YYYY-MM-DD` date relative to `reference`.
///
/// # Errors
///
/// Returns `DatewiseError::InvalidInputFormat` if the string is not a valid date.
pub fn relative_description(
    date_str: &str,
    reference: NaiveDate,
) -> Result<RelativeInfo, DatewiseError> {
    let date = parse_iso_date(date_str)?;
    Ok(describe(date, reference))
}

/// Describe `date` relative to `reference`.
#[must_use]
pub fn describe(date: NaiveDate, reference: NaiveDate) -> RelativeInfo {
    let delta = (date - reference).num_days();
    let business = business_days_between(reference, date);

    RelativeInfo {
        date,
        day_of_week: weekday_name(date.weekday()).to_string(),
        days_from_today: delta,
        business_days: if delta >= 0 { business } else { -business },
        human_readable: humanize_offset(delta),
    }
}

/// Phrase a day offset: "today", "tomorrow", "in 2 weeks and 3 days", "5 days ago".
#[must_use]
pub fn humanize_offset(delta: i64) -> String {
    match delta {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {}", weeks_and_days(d.unsigned_abs())),
        d => format!("{} ago", weeks_and_days(d.unsigned_abs())),
    }
}

fn weeks_and_days(days: u64) -> String {
    let (weeks, rest) = (days / 7, days % 7);
    let mut parts = Vec::new();
    if weeks > 0 {
        parts.push(pluralize(weeks, "week"));
    }
    if rest > 0 {
        parts.push(pluralize(rest, "day"));
    }
    parts.join(" and ")
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sunday() -> NaiveDate {
        date(2026, 2, 8)
    }

    #[test]
    fn test_special_cased_days() {
        assert_eq!(humanize_offset(0), "today");
        assert_eq!(humanize_offset(1), "tomorrow");
        assert_eq!(humanize_offset(-1), "yesterday");
    }

    #[test]
    fn test_future_phrasing() {
        assert_eq!(humanize_offset(2), "in 2 days");
        assert_eq!(humanize_offset(7), "in 1 week");
        assert_eq!(humanize_offset(8), "in 1 week and 1 day");
        assert_eq!(humanize_offset(17), "in 2 weeks and 3 days");
    }

    #[test]
    fn test_past_phrasing() {
        assert_eq!(humanize_offset(-5), "5 days ago");
        assert_eq!(humanize_offset(-14), "2 weeks ago");
        assert_eq!(humanize_offset(-22), "3 weeks and 1 day ago");
    }

    #[test]
    fn test_future_business_days() {
        // Sun Feb 8 -> Sun Feb 15: Mon-Fri
        let info = relative_description("2026-02-15", sunday()).unwrap();
        assert_eq!(info.days_from_today, 7);
        assert_eq!(info.business_days, 5);
        assert_eq!(info.human_readable, "in 1 week");
        assert_eq!(info.day_of_week, "Sunday");
    }

    #[test]
    fn test_past_business_days_are_negative() {
        // Mon Feb 2 .. Sun Feb 8 holds Mon-Fri
        let info = relative_description("2026-02-02", sunday()).unwrap();
        assert_eq!(info.days_from_today, -6);
        assert_eq!(info.business_days, -5);
        assert_eq!(info.human_readable, "6 days ago");
    }

    #[test]
    fn test_today() {
        let info = relative_description("2026-02-08", sunday()).unwrap();
        assert_eq!(info.days_from_today, 0);
        assert_eq!(info.business_days, 0);
        assert_eq!(info.human_readable, "today");
    }

    #[test]
    fn test_round_trip_with_resolver() {
        for expr in ["next wednesday", "3 days ago", "in 2 months", "eoy", "march 15"] {
            let resolved = crate::resolver::resolve(expr, sunday()).unwrap();
            let info = relative_description(&resolved.iso_date(), sunday()).unwrap();
            assert_eq!(info.days_from_today, resolved.days_from_today, "{expr}");
            assert_eq!(info.day_of_week, resolved.day_of_week, "{expr}");
        }
    }

    proptest! {
        #[test]
        fn prop_business_days_follow_offset(offset in -2000i64..2000) {
            let target = sunday() + chrono::Duration::days(offset);
            let info = describe(target, sunday());
            prop_assert!(info.business_days.abs() <= info.days_from_today.abs());
            prop_assert!(info.business_days.signum() * info.days_from_today.signum() >= 0);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            relative_description("02/08/2026", sunday()),
            Err(DatewiseError::InvalidInputFormat(_))
        ));
    }
}
