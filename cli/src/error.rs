//! Error types and result aliases for git-branch-tools.
//!
//! This module provides the crate-level error type:
//! - Specific error variants for different failure modes
//! - User-friendly error messages with recovery suggestions
//! - Helper methods for error classification
//! - Automatic conversion from common error types

use std::path::PathBuf;

use thiserror::Error;

use crate::git::GitError;

/// Main error type for git-branch-tools operations.
///
/// Each variant includes a user-friendly message. Fatal errors abort the
/// run; per-repository and per-branch failures are reported inline by the
/// command handlers instead and never surface as this type.
#[derive(Error, Debug)]
pub enum BranchToolsError {
    /// The scan root given on the command line does not exist.
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl BranchToolsError {
    /// Checks if this error was caused by bad command-line input.
    ///
    /// Returns `true` for errors the user can fix by correcting the
    /// arguments rather than their environment.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::PathNotFound(_) | Self::NotADirectory(_))
    }
}

/// Result type alias using [`BranchToolsError`].
pub type Result<T> = std::result::Result<T, BranchToolsError>;

impl From<toml::de::Error> for BranchToolsError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_include_the_offending_path() {
        let missing = BranchToolsError::PathNotFound(PathBuf::from("/no/such/dir"));
        assert!(missing.to_string().contains("/no/such/dir"));

        let not_dir = BranchToolsError::NotADirectory(PathBuf::from("/etc/passwd"));
        assert!(not_dir.to_string().contains("/etc/passwd"));
    }

    #[test]
    fn is_usage_error_identifies_bad_arguments() {
        assert!(BranchToolsError::PathNotFound(PathBuf::from("x")).is_usage_error());
        assert!(BranchToolsError::NotADirectory(PathBuf::from("x")).is_usage_error());

        assert!(!BranchToolsError::Config("bad".to_string()).is_usage_error());
        assert!(!BranchToolsError::ConfigRead("bad".to_string()).is_usage_error());
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BranchToolsError = io_err.into();
        assert!(matches!(err, BranchToolsError::Io(_)));
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: BranchToolsError = toml_err.into();
        assert!(matches!(err, BranchToolsError::ConfigRead(_)));
    }
}
