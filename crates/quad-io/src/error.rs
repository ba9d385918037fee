//! Error types for quad mesh I/O.

use std::path::PathBuf;

use quad_types::Point;
use thiserror::Error;

/// Result type for quad mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during quad mesh I/O.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Output file already exists; the writer never overwrites.
    #[error("file already exists, not overwriting: {path}")]
    AlreadyExists {
        /// Path that was refused.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A face vertex has no entry in the normal map.
    #[error("no normal computed for vertex {vertex}")]
    MissingNormal {
        /// The vertex that was missing.
        vertex: Point,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
