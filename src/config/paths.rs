//! Path resolution for datewise configuration.
//!
//! All datewise data is stored in `~/.datewise/` (or `$DATEWISE_HOME`):
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::DatewiseError;

/// Environment variable overriding the data root.
pub const HOME_ENV: &str = "DATEWISE_HOME";

/// Paths to datewise configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.datewise/`
    pub root: PathBuf,
    /// Config file: `~/.datewise/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on `$DATEWISE_HOME`, falling back to the user's
    /// home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, DatewiseError> {
        if let Ok(root) = std::env::var(HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            DatewiseError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".datewise")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".datewise"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-datewise");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}
