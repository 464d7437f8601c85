//! Error types for the class parser.
//!
//! Parsing itself never fails; these errors come from loading theme tables
//! and from the opt-in strict parsing mode.

use std::path::PathBuf;

use crate::classify::IgnoreReason;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or strictly running the parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme table file could not be read.
    #[error("Failed to read theme tables '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme table file is not valid TOML or has the wrong shape.
    #[error("Invalid theme tables: {0}")]
    Toml(#[from] toml::de::Error),

    /// A table entry holds a value no parse result may carry.
    #[error("Invalid value in table '{table}' for '{key}': {message}")]
    InvalidTable {
        table: &'static str,
        key: String,
        message: String,
    },

    /// Strict mode met a token that the lenient parser would drop.
    #[error("Unrecognized utility class '{token}' ({reason})")]
    UnrecognizedToken { token: String, reason: IgnoreReason },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a table validation error.
    pub fn invalid_table(
        table: &'static str,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidTable {
            table,
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a strict-mode error.
    pub fn unrecognized(token: impl Into<String>, reason: IgnoreReason) -> Self {
        Self::UnrecognizedToken {
            token: token.into(),
            reason,
        }
    }
}
