//! The recognized date grammars, in priority order.
//!
//! Each grammar pairs a start-anchored regex with a pure action. Patterns see
//! normalized text: lowercase, trimmed, single spaces, time suffix removed.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::grammar::{Grammar, Resolution};
use crate::core::{
    add_business_days, add_days, add_months, add_weeks, add_years, last_day_of_month,
    lookup_month, lookup_weekday, lookup_weekday_plural, month_name, next_business_day,
    next_weekday, nth_weekday_after, previous_weekday, start_of_week, weekday_name,
};

/// The chain, tried top to bottom.
///
/// Order matters where patterns overlap: `business_days` must precede
/// `in_units`, and `relative_weekday` must precede `bare_weekday`.
pub static GRAMMARS: [Grammar; 14] = [
    Grammar::new("fixed_day", &FIXED_DAY, fixed_day),
    Grammar::new("end_of_period", &END_OF_PERIOD, end_of_period),
    Grammar::new("start_of_next_period", &START_OF_NEXT_PERIOD, start_of_next_period),
    Grammar::new("relative_weekday", &RELATIVE_WEEKDAY, relative_weekday),
    Grammar::new("counted_from_now", &COUNTED_FROM_NOW, counted_from_now),
    Grammar::new("business_days", &BUSINESS_DAYS, business_days),
    Grammar::new("in_units", &IN_UNITS, in_units),
    Grammar::new("units_ago", &UNITS_AGO, units_ago),
    Grammar::new("article_from_now", &ARTICLE_FROM_NOW, article_from_now),
    Grammar::new("next_business_day", &NEXT_BUSINESS_DAY, next_business_day_phrase),
    Grammar::new("bare_weekday", &BARE_WEEKDAY, bare_weekday),
    Grammar::new("month_day", &MONTH_DAY, month_day),
    Grammar::new("day_month", &DAY_MONTH, day_month),
    Grammar::new("iso_date", &ISO_DATE, iso_date),
];

// Compiled regex patterns
static FIXED_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(today|now|tomorrow|yesterday|day after tomorrow|day before yesterday)$")
        .unwrap_or_else(|e| panic!("Invalid fixed day regex: {e}"))
});

static END_OF_PERIOD: Lazy<Regex> = Lazy::new(|| {
    // "end of (this) week|month|year", "this weekend", "eom", "eoy"
    Regex::new(r"^(?:end of (?:this )?(week|month|year)|this (weekend)|(eom)|(eoy))$")
        .unwrap_or_else(|e| panic!("Invalid end of period regex: {e}"))
});

static START_OF_NEXT_PERIOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:start|beginning) of )?next (week|month|year)$")
        .unwrap_or_else(|e| panic!("Invalid start of period regex: {e}"))
});

static RELATIVE_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(next|this|last|previous) (\w+)")
        .unwrap_or_else(|e| panic!("Invalid relative weekday regex: {e}"))
});

static COUNTED_FROM_NOW: Lazy<Regex> = Lazy::new(|| {
    // "2 fridays from now", "3 weeks from today"
    Regex::new(r"^(\d+) (\w+) from (?:now|today)")
        .unwrap_or_else(|e| panic!("Invalid counted offset regex: {e}"))
});

static BUSINESS_DAYS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^in (\d+) (?:business days?|workdays?|work days?)")
        .unwrap_or_else(|e| panic!("Invalid business days regex: {e}"))
});

static IN_UNITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^in (\d+) (\w+)$").unwrap_or_else(|e| panic!("Invalid offset regex: {e}"))
});

static UNITS_AGO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+) (\w+) ago").unwrap_or_else(|e| panic!("Invalid ago regex: {e}"))
});

static ARTICLE_FROM_NOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^an? (week|month|year) from (?:now|today)")
        .unwrap_or_else(|e| panic!("Invalid article offset regex: {e}"))
});

static NEXT_BUSINESS_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^next (?:weekday|business day|workday)$")
        .unwrap_or_else(|e| panic!("Invalid next business day regex: {e}"))
});

static BARE_WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]+)$").unwrap_or_else(|e| panic!("Invalid weekday regex: {e}"))
});

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    // "march 15", "mar 15th", "march 15, 2027"
    Regex::new(r"^([a-z]+) (\d{1,2})(?:st|nd|rd|th)?(?:\s*,?\s*(\d{4}))?$")
        .unwrap_or_else(|e| panic!("Invalid month day regex: {e}"))
});

static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    // "15 march", "15th of march", "15 march 2027"
    Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)? (?:of )?([a-z]+)(?:\s*,?\s*(\d{4}))?$")
        .unwrap_or_else(|e| panic!("Invalid day month regex: {e}"))
});

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap_or_else(|e| panic!("Invalid ISO regex: {e}"))
});

/// Calendar unit accepted by the additive grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "day" | "days" => Some(Self::Day),
            "week" | "weeks" => Some(Self::Week),
            "month" | "months" => Some(Self::Month),
            "year" | "years" => Some(Self::Year),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Shift `date` by `amount` units. Months and years are calendar-aware.
    fn shift(self, date: NaiveDate, amount: i64) -> Option<NaiveDate> {
        match self {
            Self::Day => add_days(date, amount),
            Self::Week => add_weeks(date, amount),
            Self::Month => add_months(date, amount),
            Self::Year => add_years(date, amount),
        }
    }
}

fn count(caps: &Captures<'_>, group: usize) -> Option<i64> {
    caps.get(group)?.as_str().parse().ok()
}

fn fixed_day(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let (offset, description) = match caps.get(1)?.as_str() {
        "today" | "now" => (0, "today"),
        "tomorrow" => (1, "tomorrow"),
        "yesterday" => (-1, "yesterday"),
        "day after tomorrow" => (2, "day after tomorrow"),
        "day before yesterday" => (-2, "day before yesterday"),
        _ => return None,
    };
    Some(Resolution::new(add_days(today, offset)?, description))
}

fn end_of_period(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let period = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .or_else(|| caps.get(3).map(|_| "month"))
        .or_else(|| caps.get(4).map(|_| "year"))?;

    match period {
        "week" | "weekend" => {
            let mut days_to_sunday = 6 - i64::from(today.weekday().num_days_from_monday());
            // "this weekend" on a Sunday means the coming one
            if days_to_sunday == 0 && period == "weekend" {
                days_to_sunday = 7;
            }
            Some(Resolution::new(
                add_days(today, days_to_sunday)?,
                "end of this week (Sunday)",
            ))
        }
        "month" => Some(Resolution::new(
            last_day_of_month(today.year(), today.month())?,
            "end of this month",
        )),
        "year" => Some(Resolution::new(
            NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            "end of this year",
        )),
        _ => None,
    }
}

fn start_of_next_period(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    match caps.get(1)?.as_str() {
        "week" => Some(Resolution::new(
            add_weeks(start_of_week(today)?, 1)?,
            "start of next week (Monday)",
        )),
        "month" => Some(Resolution::new(
            add_months(today.with_day(1)?, 1)?,
            "start of next month",
        )),
        "year" => Some(Resolution::new(
            NaiveDate::from_ymd_opt(today.year().checked_add(1)?, 1, 1)?,
            "start of next year",
        )),
        _ => None,
    }
}

fn relative_weekday(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let modifier = caps.get(1)?.as_str();
    let word = caps.get(2)?.as_str();
    let forward = matches!(modifier, "next" | "this");

    if let Some(weekday) = lookup_weekday(word) {
        return if forward {
            Some(Resolution::new(next_weekday(today, weekday)?, format!("next {word}")))
        } else {
            Some(Resolution::new(previous_weekday(today, weekday)?, format!("last {word}")))
        };
    }

    // "this week" / "this month" are not dates
    if modifier == "this" {
        return None;
    }

    match word {
        "week" => {
            let monday = start_of_week(today)?;
            if forward {
                Some(Resolution::new(add_weeks(monday, 1)?, "start of next week"))
            } else {
                Some(Resolution::new(add_weeks(monday, -1)?, "start of last week"))
            }
        }
        "month" => {
            let first = today.with_day(1)?;
            if forward {
                Some(Resolution::new(add_months(first, 1)?, "start of next month"))
            } else {
                Some(Resolution::new(add_months(first, -1)?, "start of last month"))
            }
        }
        _ => None,
    }
}

fn counted_from_now(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let amount = count(caps, 1)?;
    let word = caps.get(2)?.as_str();

    if let Some(weekday) = lookup_weekday_plural(word) {
        let nth = u32::try_from(amount).ok()?;
        let date = nth_weekday_after(today, weekday, nth)?;
        let name = weekday_name(weekday).to_lowercase();
        return Some(Resolution::new(date, format!("{amount} {name}(s) from now")));
    }

    let unit = Unit::parse(word)?;
    Some(Resolution::new(
        unit.shift(today, amount)?,
        format!("{amount} {}(s) from now", unit.as_str()),
    ))
}

fn business_days(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let amount: u64 = caps.get(1)?.as_str().parse().ok()?;
    Some(Resolution::new(
        add_business_days(today, amount)?,
        format!("in {amount} business day(s)"),
    ))
}

fn in_units(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let amount = count(caps, 1)?;
    let unit = Unit::parse(caps.get(2)?.as_str())?;
    Some(Resolution::new(
        unit.shift(today, amount)?,
        format!("in {amount} {}(s)", unit.as_str()),
    ))
}

fn units_ago(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let amount = count(caps, 1)?;
    let unit = Unit::parse(caps.get(2)?.as_str())?;
    Some(Resolution::new(
        unit.shift(today, amount.checked_neg()?)?,
        format!("{amount} {}(s) ago", unit.as_str()),
    ))
}

fn article_from_now(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let unit = Unit::parse(caps.get(1)?.as_str())?;
    Some(Resolution::new(
        unit.shift(today, 1)?,
        format!("a {} from now", unit.as_str()),
    ))
}

fn next_business_day_phrase(_caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    Some(Resolution::new(next_business_day(today)?, "next business day"))
}

fn bare_weekday(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    let word = caps.get(1)?.as_str();
    let weekday = lookup_weekday(word)?;
    Some(Resolution::new(next_weekday(today, weekday)?, format!("next {word}")))
}

fn month_day(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    calendar_date(
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3).map(|m| m.as_str()),
        today,
    )
}

fn day_month(caps: &Captures<'_>, today: NaiveDate) -> Option<Resolution> {
    calendar_date(
        caps.get(2)?.as_str(),
        caps.get(1)?.as_str(),
        caps.get(3).map(|m| m.as_str()),
        today,
    )
}

/// Build a month/day date. Without an explicit year the current year is
/// used, rolling to next year once the date has passed.
fn calendar_date(
    month_word: &str,
    day: &str,
    year: Option<&str>,
    today: NaiveDate,
) -> Option<Resolution> {
    let month = lookup_month(month_word)?;
    let day: u32 = day.parse().ok()?;

    let date = match year {
        Some(year) => NaiveDate::from_ymd_opt(year.parse().ok()?, month, day)?,
        None => {
            let candidate = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if candidate < today {
                NaiveDate::from_ymd_opt(today.year().checked_add(1)?, month, day)?
            } else {
                candidate
            }
        }
    };

    let description = format!("{} {day}, {}", month_name(month)?, date.year());
    Some(Resolution::new(date, description))
}

fn iso_date(caps: &Captures<'_>, _today: NaiveDate) -> Option<Resolution> {
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    Some(Resolution::new(NaiveDate::from_ymd_opt(year, month, day)?, "ISO date"))
}
