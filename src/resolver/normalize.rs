//! Input normalization ahead of grammar matching.

use once_cell::sync::Lazy;
use regex::Regex;

// A trailing time-of-day clause: "at 3", "at 3:30pm", "in the morning",
// or a bare "morning"/"afternoon"/"evening"/"night".
static TIME_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\s+(?:at\s+\d{1,2}(?::\d{2})?\s*(?:am|pm)?|in\s+the\s+(?:morning|afternoon|evening)|morning|afternoon|evening|night)$",
    )
    .unwrap_or_else(|e| panic!("Invalid time suffix regex: {e}"))
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").unwrap_or_else(|e| panic!("Invalid whitespace regex: {e}")));

/// A lowercased, trimmed expression ready for the grammar chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Text handed to the grammars.
    pub text: String,
    /// Whether a time-of-day clause was removed from the end.
    pub had_time_suffix: bool,
}

/// Lowercase, trim and collapse whitespace, then strip a trailing
/// time-of-day clause.
///
/// "tomorrow morning" normalizes to "tomorrow" with `had_time_suffix` set.
#[must_use]
pub fn normalize(input: &str) -> Normalized {
    let lowered = input.trim().to_lowercase();
    let collapsed = WHITESPACE.replace_all(&lowered, " ");

    match TIME_SUFFIX.find(&collapsed).map(|m| m.start()) {
        Some(start) => Normalized {
            text: collapsed[..start].trim().to_string(),
            had_time_suffix: true,
        },
        None => Normalized {
            text: collapsed.into_owned(),
            had_time_suffix: false,
        },
    }
}
