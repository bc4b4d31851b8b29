//! Plain-text month calendars.
//!
//! Renders the classic terminal grid:
//!
//! ```text
//!    February 2026
//! Su Mo Tu We Th Fr Sa
//!  1  2  3  4  5  6  7
//!  8  9 10 11 12 13 14
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{days_in_month, month_name};
use crate::error::DatewiseError;

/// Width of a rendered week line: seven two-column cells and six separators.
const GRID_WIDTH: usize = 20;

/// One week row; `None` cells fall outside the month.
pub type Week = [Option<u32>; 7];

/// Day the calendar grid starts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstWeekday {
    #[default]
    Sunday,
    Monday,
}

impl FirstWeekday {
    const fn header(self) -> &'static str {
        match self {
            Self::Sunday => "Su Mo Tu We Th Fr Sa",
            Self::Monday => "Mo Tu We Th Fr Sa Su",
        }
    }

    fn leading_blanks(self, first_of_month: NaiveDate) -> u32 {
        match self {
            Self::Sunday => first_of_month.weekday().num_days_from_sunday(),
            Self::Monday => first_of_month.weekday().num_days_from_monday(),
        }
    }
}

/// Split a month into week rows.
///
/// # Errors
///
/// Returns `DatewiseError::InvalidCalendarDate` if the month is outside 1-12
/// or the year is out of range.
pub fn month_weeks(year: i32, month: u32, first: FirstWeekday) -> Result<Vec<Week>, DatewiseError> {
    let invalid = || DatewiseError::InvalidCalendarDate(format!("month {month} of year {year}"));
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let total_days = days_in_month(year, month).ok_or_else(invalid)?;

    let cells: Vec<Option<u32>> = (0..first.leading_blanks(first_of_month))
        .map(|_| None)
        .chain((1..=total_days).map(Some))
        .collect();

    Ok(cells
        .chunks(7)
        .map(|chunk| {
            let mut week: Week = [None; 7];
            week[..chunk.len()].copy_from_slice(chunk);
            week
        })
        .collect())
}

/// Title line for a month, e.g. "February 2026".
///
/// # Errors
///
/// Returns `DatewiseError::InvalidCalendarDate` if the month is outside 1-12.
pub fn month_title(year: i32, month: u32) -> Result<String, DatewiseError> {
    let name = month_name(month)
        .ok_or_else(|| DatewiseError::InvalidCalendarDate(format!("month {month} of year {year}")))?;
    Ok(format!("{name} {year}"))
}

/// Center `text` over the grid width.
#[must_use]
pub fn center(text: &str) -> String {
    let padding = GRID_WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// Render one week row with right-aligned two-column cells.
#[must_use]
pub fn format_week(week: &Week) -> String {
    week.iter()
        .map(|cell| cell.map_or_else(|| "  ".to_string(), |day| format!("{day:2}")))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Day-name header for the grid.
#[must_use]
pub const fn weekday_header(first: FirstWeekday) -> &'static str {
    first.header()
}

/// Render a month as a text grid. Every line ends with a newline and has
/// no trailing spaces.
///
/// # Errors
///
/// Returns `DatewiseError::InvalidCalendarDate` if the month is outside 1-12.
pub fn render_month(year: i32, month: u32, first: FirstWeekday) -> Result<String, DatewiseError> {
    let mut output = center(&month_title(year, month)?);
    output.push('\n');
    output.push_str(first.header());
    output.push('\n');
    for week in month_weeks(year, month, first)? {
        output.push_str(&format_week(&week));
        output.push('\n');
    }
    Ok(output)
}

/// Render a month, defaulting missing parts to the reference date's.
///
/// # Errors
///
/// Returns `DatewiseError::InvalidCalendarDate` if the month is outside 1-12.
pub fn show_calendar(
    month: Option<u32>,
    year: Option<i32>,
    reference: NaiveDate,
    first: FirstWeekday,
) -> Result<String, DatewiseError> {
    render_month(
        year.unwrap_or_else(|| reference.year()),
        month.unwrap_or_else(|| reference.month()),
        first,
    )
}

/// A month grid together with its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub first_weekday: FirstWeekday,
    pub weeks: Vec<Week>,
    pub text: String,
}

impl MonthCalendar {
    /// Build the grid for `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns `DatewiseError::InvalidCalendarDate` if the month is outside 1-12.
    pub fn new(year: i32, month: u32, first: FirstWeekday) -> Result<Self, DatewiseError> {
        Ok(Self {
            year,
            month,
            title: month_title(year, month)?,
            first_weekday: first,
            weeks: month_weeks(year, month, first)?,
            text: render_month(year, month, first)?,
        })
    }

    /// Build the grid, defaulting missing parts to the reference date's.
    ///
    /// # Errors
    ///
    /// Returns `DatewiseError::InvalidCalendarDate` if the month is outside 1-12.
    pub fn for_reference(
        month: Option<u32>,
        year: Option<i32>,
        reference: NaiveDate,
        first: FirstWeekday,
    ) -> Result<Self, DatewiseError> {
        Self::new(
            year.unwrap_or_else(|| reference.year()),
            month.unwrap_or_else(|| reference.month()),
            first,
        )
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
