use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "datewise")]
#[command(about = "Resolve natural language date expressions to calendar dates")]
#[command(long_about = "datewise - natural language dates for scripts and agents

Turns phrases like \"next wednesday\", \"in 3 business days\" or
\"2 fridays from now\" into ISO dates, deterministically.

QUICK START:
  datewise resolve next wednesday       Resolve an expression
  datewise weekday 2026-02-08           Day of week for a date
  datewise calendar 2 2026              Show a month calendar
  datewise relative 2026-03-15          Describe a date relative to today

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

REFERENCE DATE:
  --today 2026-02-08 (or DATEWISE_TODAY) pins \"today\" for reproducible runs.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to the configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Reference date used as "today" (YYYY-MM-DD)
    #[arg(long, global = true, env = "DATEWISE_TODAY", value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,

    /// Path to an alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logging to stderr (same as DATEWISE_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a natural language date expression
    ///
    /// The first matching pattern wins. Time of day is detected and
    /// ignored, with a warning.
    ///
    /// # Supported Patterns
    ///
    ///   Fixed:       today, now, tomorrow, yesterday, day after tomorrow
    ///   Boundaries:  end of week, this weekend, eom, eoy, start of next month
    ///   Weekdays:    friday, next wednesday, last monday, next week
    ///   Counted:     2 fridays from now, 3 weeks from today, a month from now
    ///   Offsets:     in 3 days, in 2 months, 5 days ago
    ///   Business:    in 3 business days, next business day
    ///   Dates:       march 15, 15th of march, dec 25 2027, 2026-03-15
    ///
    /// # Examples
    ///
    ///   datewise resolve next wednesday
    ///   datewise resolve "in 3 business days" -o json
    #[command(alias = "r")]
    Resolve {
        /// The expression; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },

    /// Day of week for a date
    ///
    /// # Examples
    ///
    ///   datewise weekday 2026-02-08
    #[command(alias = "w")]
    Weekday {
        /// Date in YYYY-MM-DD form
        date: String,
    },

    /// Show a month calendar
    ///
    /// Defaults to the month of the reference date.
    ///
    /// # Examples
    ///
    ///   datewise calendar
    ///   datewise calendar 2 2026
    ///   datewise calendar 12 --monday
    #[command(alias = "cal")]
    Calendar {
        /// Month (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Year (e.g. 2026)
        #[arg(allow_negative_numbers = true)]
        year: Option<i32>,
        /// Start weeks on Monday instead of the configured day
        #[arg(long)]
        monday: bool,
    },

    /// Describe a date relative to today
    ///
    /// Shows the day offset, business days between, and a human phrase
    /// such as "in 2 weeks and 3 days".
    ///
    /// # Examples
    ///
    ///   datewise relative 2026-03-15
    #[command(alias = "rel")]
    Relative {
        /// Date in YYYY-MM-DD form
        date: String,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   source <(datewise completions bash)
    ///   datewise completions zsh > ~/.zsh/completions/_datewise
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse the `--today` value.
///
/// # Errors
///
/// Returns a message if the value is not a valid `YYYY-MM-DD` date.
pub fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    crate::core::parse_iso_date(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_joins_words() {
        let cli = Cli::parse_from(["datewise", "resolve", "next", "wednesday"]);
        match cli.command {
            Commands::Resolve { expression } => assert_eq!(expression.join(" "), "next wednesday"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["datewise", "resolve", "today", "-o", "json", "--today", "2026-02-08"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 2, 8));
    }

    #[test]
    fn test_bad_reference_date_is_rejected() {
        assert!(Cli::try_parse_from(["datewise", "--today", "tomorrow", "resolve", "today"]).is_err());
    }

    #[test]
    fn test_calendar_month_range() {
        assert!(Cli::try_parse_from(["datewise", "calendar", "13"]).is_err());
        let cli = Cli::parse_from(["datewise", "calendar", "2", "2026", "--monday"]);
        match cli.command {
            Commands::Calendar { month, year, monday } => {
                assert_eq!(month, Some(2));
                assert_eq!(year, Some(2026));
                assert!(monday);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
