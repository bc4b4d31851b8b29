//! Command-line interface for datewise.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};
