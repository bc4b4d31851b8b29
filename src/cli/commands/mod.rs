//! Command implementations for datewise.
//!
//! Each command returns its rendered output; `main` prints it.

mod completions;

pub use completions::completions;

use chrono::NaiveDate;

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::DatewiseError;
use crate::info::{get_weekday, relative_description, FirstWeekday, MonthCalendar};
use crate::output::{format_calendar, format_relative, format_resolution, format_weekday};
use crate::resolver::Resolver;

/// Settings shared by every command, merged from flags and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub reference: NaiveDate,
    pub format: OutputFormat,
    pub first_weekday: FirstWeekday,
    pub highlight_today: bool,
}

impl Context {
    /// Flags win over config; the reference date falls back to the local day.
    #[must_use]
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            reference: cli.today.unwrap_or_else(|| Resolver::today().reference()),
            format: cli.output.unwrap_or(config.general.default_output),
            first_weekday: config.calendar.first_weekday,
            highlight_today: config.calendar.highlight_today,
        }
    }
}

/// Run a parsed command.
///
/// # Errors
///
/// Returns the command's error; `main` reports it and exits non-zero.
pub fn dispatch(command: Commands, ctx: &Context) -> Result<String, DatewiseError> {
    match command {
        Commands::Resolve { expression } => resolve(ctx, &expression),
        Commands::Weekday { date } => weekday(ctx, &date),
        Commands::Calendar { month, year, monday } => calendar(ctx, month, year, monday),
        Commands::Relative { date } => relative(ctx, &date),
        Commands::Completions { shell } => completions(shell),
    }
}

/// Execute resolve command
///
/// # Errors
///
/// Returns `DatewiseError::UnrecognizedExpression` if nothing matches.
pub fn resolve(ctx: &Context, words: &[String]) -> Result<String, DatewiseError> {
    let expression = words.join(" ");
    let result = Resolver::new(ctx.reference).resolve(&expression)?;
    format_resolution(&result, ctx.format)
}

/// Execute weekday command
///
/// # Errors
///
/// Returns `DatewiseError::InvalidInputFormat` if the date is malformed.
pub fn weekday(ctx: &Context, date: &str) -> Result<String, DatewiseError> {
    let info = get_weekday(date)?;
    format_weekday(&info, ctx.format)
}

/// Execute calendar command
///
/// # Errors
///
/// Returns `DatewiseError::InvalidCalendarDate` if the month is out of range.
pub fn calendar(
    ctx: &Context,
    month: Option<u32>,
    year: Option<i32>,
    monday: bool,
) -> Result<String, DatewiseError> {
    let first = if monday { FirstWeekday::Monday } else { ctx.first_weekday };
    let calendar = MonthCalendar::for_reference(month, year, ctx.reference, first)?;
    let highlight = ctx.highlight_today.then_some(ctx.reference);
    format_calendar(&calendar, highlight, ctx.format)
}

/// Execute relative command
///
/// # Errors
///
/// Returns `DatewiseError::InvalidInputFormat` if the date is malformed.
pub fn relative(ctx: &Context, date: &str) -> Result<String, DatewiseError> {
    let info = relative_description(date, ctx.reference)?;
    format_relative(&info, ctx.format)
}
