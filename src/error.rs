//! Error types for the timeline command-line layer.
//!
//! Parsing and date derivation never fail; these errors come from reading
//! input, loading configuration, and rendering output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TimelineError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Io(_) | Self::Read { .. } | Self::Config(_) | Self::Serialization(_) => 1,
        }
    }
}
