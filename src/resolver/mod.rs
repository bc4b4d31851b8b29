//! Natural language date resolution.
//!
//! Turns phrases like "next wednesday", "in 3 business days" or
//! "2 fridays from now" into a calendar date relative to a reference day:
//!
//! 1. The input is normalized (lowercase, trimmed, time suffix stripped).
//! 2. Each grammar is tried in priority order; the first match wins.
//! 3. The match is turned into a [`ResolutionResult`].

mod grammar;
mod grammars;
mod normalize;
mod result;

pub use grammar::{grammar, grammar_names, match_expression, ChainMatch, Grammar, Resolution};
pub use normalize::{normalize, Normalized};
pub use result::{ResolutionResult, TIME_IGNORED_WARNING};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::DatewiseError;

/// Resolves expressions against a fixed reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    reference: NaiveDate,
}

impl Resolver {
    /// Create a resolver anchored at `reference`.
    #[must_use]
    pub const fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// Create a resolver anchored at a datetime; the time of day is dropped.
    #[must_use]
    pub const fn from_datetime(reference: NaiveDateTime) -> Self {
        Self::new(reference.date())
    }

    /// Create a resolver anchored at the local current date.
    #[must_use]
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    #[must_use]
    pub const fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Resolve a natural language expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datewise::resolver::Resolver;
    ///
    /// let sunday = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
    /// let result = Resolver::new(sunday).resolve("next wednesday").unwrap();
    /// assert_eq!(result.iso_date(), "2026-02-11");
    /// assert_eq!(result.day_of_week, "Wednesday");
    /// assert_eq!(result.days_from_today, 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DatewiseError::UnrecognizedExpression` carrying the original
    /// input when no grammar matches.
    pub fn resolve(&self, expression: &str) -> Result<ResolutionResult, DatewiseError> {
        let normalized = normalize(expression);
        log::debug!(
            "resolving '{}' against {} (time suffix: {})",
            normalized.text,
            self.reference,
            normalized.had_time_suffix
        );

        let Some(matched) = match_expression(&normalized.text, self.reference) else {
            log::debug!("no grammar matched '{}'", normalized.text);
            return Err(DatewiseError::UnrecognizedExpression(expression.to_string()));
        };
        log::debug!("grammar '{}' resolved to {}", matched.grammar, matched.resolution.date);

        Ok(ResolutionResult::build(
            matched.resolution,
            expression,
            self.reference,
            normalized.had_time_suffix,
        ))
    }
}

/// Resolve `expression` against `reference`.
///
/// # Errors
///
/// Returns `DatewiseError::UnrecognizedExpression` when no grammar matches.
pub fn resolve(expression: &str, reference: NaiveDate) -> Result<ResolutionResult, DatewiseError> {
    Resolver::new(reference).resolve(expression)
}

/// Resolve `expression` against the local current date.
///
/// # Errors
///
/// Returns `DatewiseError::UnrecognizedExpression` when no grammar matches.
pub fn resolve_now(expression: &str) -> Result<ResolutionResult, DatewiseError> {
    Resolver::today().resolve(expression)
}
