//! Result and error types for covdata.

use thiserror::Error;

/// Result type for covdata operations
pub type CovResult<T> = Result<T, CovError>;

/// Errors that can occur in covdata
///
/// Damaged or missing data files are not errors when reading; see
/// [`crate::RecordRead`].
#[derive(Debug, Error)]
pub enum CovError {
    /// The working directory could not be determined
    #[error("Cannot resolve data file against working directory: {message}")]
    WorkingDirectory {
        /// Error message
        message: String,
    },

    /// The data file path cannot be used for the requested operation
    #[error("Invalid data file path {path}: {message}")]
    InvalidPath {
        /// Offending path
        path: String,
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CovError {
    /// Create an invalid path error
    #[must_use]
    pub fn invalid_path(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}
