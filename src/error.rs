//! Error types and handling infrastructure for collview.
//!
//! Library code returns [`CollviewError`] through the crate-wide [`Result`] alias. The
//! binary wraps these in `anyhow` for context at the command-line boundary.
//!
//! The record filter itself never fails: every query degrades to a (possibly empty)
//! view. Errors only arise while reading data files, writing bundles, talking to the
//! terminal, or parsing configuration.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for collview operations.
#[derive(Error, Debug)]
pub enum CollviewError {
    /// File system related errors (permission denied, read failures, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// A data file could not be parsed as records
    #[error("Malformed data in {path}: {message}")]
    DataFormat { path: PathBuf, message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for collview operations.
pub type Result<T> = std::result::Result<T, CollviewError>;

impl CollviewError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a DataFormat error for a specific source file
    pub fn data_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CollviewError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            // The path is unknown here; call sites with a path use FileNotFound directly.
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/data/colecao.csv");

        let file_not_found = CollviewError::FileNotFound { path: path.clone() };
        assert_eq!(
            file_not_found.to_string(),
            "File not found: /data/colecao.csv"
        );

        let not_a_file = CollviewError::NotAFile { path: path.clone() };
        assert_eq!(
            not_a_file.to_string(),
            "Path is not a regular file: /data/colecao.csv"
        );

        let malformed = CollviewError::data_format(&path, "expected a JSON array");
        assert_eq!(
            malformed.to_string(),
            "Malformed data in /data/colecao.csv: expected a JSON array"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            CollviewError::ui("Terminal resize failed"),
            CollviewError::UIError { .. }
        ));
        assert!(matches!(
            CollviewError::config("unknown theme"),
            CollviewError::ConfigError { .. }
        ));
        assert!(matches!(
            CollviewError::invalid_argument("bad flag"),
            CollviewError::InvalidArgument { .. }
        ));
        assert!(matches!(
            CollviewError::other("Unknown error"),
            CollviewError::Other { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CollviewError = io_err.into();

        match err {
            CollviewError::FileError { message, .. } => {
                assert_eq!(message, "File not found");
            }
            _ => panic!("Expected FileError variant"),
        }

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: CollviewError = io_err.into();
        assert!(matches!(
            err,
            CollviewError::FileError { ref message, .. } if message == "Permission denied"
        ));
    }
}
