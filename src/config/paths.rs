//! Path resolution for timeline configuration files.
//!
//! Configuration lives in `~/.timeline/config.yaml`.

use std::path::PathBuf;

use crate::error::TimelineError;

/// Paths to timeline configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.timeline/`
    pub root: PathBuf,
    /// Config file: `~/.timeline/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TimelineError> {
        let home = std::env::var("HOME").map_err(|_| {
            TimelineError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".timeline")))
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
            Self::with_root(PathBuf::from(".timeline"))
        })
    }
}
