//! datewise - natural language date resolution
//!
//! Resolves phrases such as "next wednesday", "in 3 business days" or
//! "2 fridays from now" to calendar dates relative to a reference day,
//! and answers a few related questions (weekday of a date, distance to a
//! date, month calendars).
//!
//! ```
//! use chrono::NaiveDate;
//! use datewise::Resolver;
//!
//! let sunday = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
//! let result = Resolver::new(sunday).resolve("next wednesday").unwrap();
//! assert_eq!(result.iso_date(), "2026-02-11");
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod info;
pub mod logger;
pub mod output;
pub mod resolver;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::DatewiseError;
pub use resolver::{resolve, resolve_now, ResolutionResult, Resolver};
