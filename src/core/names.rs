//! Weekday and month name tables.
//!
//! Both tables are built once and shared read-only. Keys are stored
//! lowercase; lookups lowercase their input instead of duplicating entries.

use std::collections::HashMap;

use chrono::Weekday;
use once_cell::sync::Lazy;

static WEEKDAYS: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| {
    HashMap::from([
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
        // Abbreviations
        ("mon", Weekday::Mon),
        ("tue", Weekday::Tue),
        ("tues", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("thu", Weekday::Thu),
        ("thur", Weekday::Thu),
        ("thurs", Weekday::Thu),
        ("fri", Weekday::Fri),
        ("sat", Weekday::Sat),
        ("sun", Weekday::Sun),
    ])
});

static MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // Abbreviations
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("sept", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ])
});

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up a weekday by full name or abbreviation, ignoring case.
#[must_use]
pub fn lookup_weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS.get(name.to_lowercase().as_str()).copied()
}

/// Look up a month number (1-12) by full name or abbreviation, ignoring case.
#[must_use]
pub fn lookup_month(name: &str) -> Option<u32> {
    MONTHS.get(name.to_lowercase().as_str()).copied()
}

/// Look up a weekday, also accepting a plural form ("fridays", "tues").
///
/// The word itself is tried first so that abbreviations ending in `s`
/// ("tues", "thurs") resolve directly.
#[must_use]
pub fn lookup_weekday_plural(word: &str) -> Option<Weekday> {
    lookup_weekday(word).or_else(|| word.strip_suffix('s').and_then(lookup_weekday))
}

/// Full English name of a weekday ("Wednesday").
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a month, or `None` outside 1-12.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}
