//! Configuration management for datewise.
//!
//! This module handles loading and saving configuration from `~/.datewise/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{CalendarConfig, ColorSetting, Config, GeneralConfig};
