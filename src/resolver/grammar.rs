//! Grammar type and the ordered matcher chain.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::grammars::GRAMMARS;

/// A date produced by a grammar, with a short human description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub date: NaiveDate,
    pub description: String,
}

impl Resolution {
    #[must_use]
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}

/// Semantic action run on a successful pattern match.
///
/// Returning `None` rejects the match (for example an impossible calendar
/// date) and lets the chain continue with the next grammar.
pub type Action = fn(&Captures<'_>, NaiveDate) -> Option<Resolution>;

/// One recognized phrase pattern paired with its date computation.
pub struct Grammar {
    pub name: &'static str,
    pattern: &'static Lazy<Regex>,
    action: Action,
}

impl Grammar {
    #[must_use]
    pub const fn new(name: &'static str, pattern: &'static Lazy<Regex>, action: Action) -> Self {
        Self {
            name,
            pattern,
            action,
        }
    }

    /// Whether the text matches this grammar's pattern, regardless of
    /// whether the action accepts it.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Match the pattern and run the action against `reference`.
    #[must_use]
    pub fn apply(&self, text: &str, reference: NaiveDate) -> Option<Resolution> {
        let caps = self.pattern.captures(text)?;
        (self.action)(&caps, reference)
    }
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Outcome of running the chain: the resolution and the grammar that won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMatch {
    pub resolution: Resolution,
    pub grammar: &'static str,
}

/// Try each grammar in priority order; the first success wins.
#[must_use]
pub fn match_expression(text: &str, reference: NaiveDate) -> Option<ChainMatch> {
    GRAMMARS.iter().find_map(|grammar| {
        let resolution = grammar.apply(text, reference);
        if resolution.is_none() && grammar.is_match(text) {
            log::trace!("grammar '{}' matched '{text}' but rejected it", grammar.name);
        }
        resolution.map(|resolution| ChainMatch {
            resolution,
            grammar: grammar.name,
        })
    })
}

/// Names of all grammars, in the order they are tried.
#[must_use]
pub fn grammar_names() -> Vec<&'static str> {
    GRAMMARS.iter().map(|g| g.name).collect()
}

/// Look up a single grammar by name.
#[must_use]
pub fn grammar(name: &str) -> Option<&'static Grammar> {
    GRAMMARS.iter().find(|g| g.name == name)
}
