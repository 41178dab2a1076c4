//! Error types for the select picker.

use std::path::PathBuf;

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the picker's fallible edges.
///
/// The projection itself never fails; these cover configuration loading and
/// search pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search filter could not be compiled into a fuzzy pattern.
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidSearchPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// TOML configuration could not be parsed.
    #[error("Invalid TOML configuration: {0}")]
    ConfigToml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed.
    #[error("Invalid JSON configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a search pattern error.
    pub fn invalid_search_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidSearchPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
