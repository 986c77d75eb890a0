//! Error types for the contact normalizer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! A value that fails validation is not an error: it is reported as invalid data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an input file.
#[derive(Error, Debug)]
pub enum LintError {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report could not be written
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl LintError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with LintError
pub type LintResult<T> = Result<T, LintError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = LintError::FileNotFound(PathBuf::from("Email.txt"));
        assert_eq!(err.to_string(), "File not found: Email.txt");

        let err = ConfigError::InvalidValue {
            var: "EMAIL_POLICY".to_string(),
            reason: "unknown".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for EMAIL_POLICY: unknown");
    }

    #[test]
    fn test_from_io_classifies_not_found() {
        let err = LintError::from_io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, LintError::FileNotFound(_)));

        let err = LintError::from_io(
            "locked.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, LintError::Io { .. }));
    }
}
