//! Error types for registry loading.

use std::path::PathBuf;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a component registry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Registry file could not be read.
    #[error("Failed to read registry '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registry JSON is malformed or has the wrong shape.
    #[error("Invalid registry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
