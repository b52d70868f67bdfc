//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Combine finished but some data files were unusable
    #[error("{skipped} data file(s) could not be combined")]
    IncompleteCombine {
        /// Number of skipped files
        skipped: usize,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Coverage store error
    #[error("Coverage data error: {0}")]
    Store(#[from] covdata::CovError),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_incomplete_combine_error() {
        let err = CliError::IncompleteCombine { skipped: 2 };
        assert_eq!(err.to_string(), "2 data file(s) could not be combined");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_store_error_from() {
        let store_err = covdata::CovError::invalid_path(std::path::Path::new("/"), "no name");
        let cli_err: CliError = store_err.into();
        assert!(cli_err.to_string().starts_with("Coverage data error"));
    }
}
