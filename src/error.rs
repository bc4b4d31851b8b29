//! Error types for datewise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while resolving or describing dates.
#[derive(Error, Debug)]
pub enum DatewiseError {
    /// No grammar recognized the expression. Carries the raw input.
    #[error("Could not parse: '{0}'")]
    UnrecognizedExpression(String),

    /// A computed or requested date does not exist on the calendar.
    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    /// A date string was not a well-formed `YYYY-MM-DD` value.
    #[error("Invalid date format: '{0}', expected YYYY-MM-DD")]
    InvalidInputFormat(String),

    /// Configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DatewiseError {
    /// Convert into the structured error value returned across the boundary.
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
        }
    }
}

/// Structured error object, serialized as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

pub type Result<T> = std::result::Result<T, DatewiseError>;
