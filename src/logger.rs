// A minimal stderr logger for the `log` facade. Filtering is left to
// `log::set_max_level`, so `enabled` always says yes.

use std::path::{Path, PathBuf};

use log::{LevelFilter, Log};
use once_cell::sync::Lazy;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "DATEWISE_LOG";

/// Logs every record to stderr as `time|LEVEL|file:line: message`.
#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Install the logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if another logger was already installed.
    pub fn init() -> Result<&'static Self, log::SetLoggerError> {
        static LOGGER: Logger = Logger;
        log::set_logger(&LOGGER)?;
        Ok(&LOGGER)
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let now = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                eprintln!(
                    "{now}|{}|{}:{line}: {}",
                    record.level(),
                    relative(file),
                    record.args()
                );
            }
            (Some(file), None) => {
                eprintln!("{now}|{}|{}: {}", record.level(), relative(file), record.args());
            }
            _ => {
                eprintln!("{now}|{}: {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Parse a level name as accepted in `DATEWISE_LOG`. Empty means off.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "" | "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn relative(path: &str) -> &str {
    static CWD: Lazy<Option<PathBuf>> = Lazy::new(|| std::env::current_dir().ok());
    let Some(cwd) = CWD.as_deref() else { return path };
    Path::new(path)
        .strip_prefix(cwd)
        .ok()
        .and_then(Path::to_str)
        .unwrap_or(path)
}
