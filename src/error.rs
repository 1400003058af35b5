//! Error types for configuration loading

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config JSON was malformed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config values are out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}
