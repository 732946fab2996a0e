//! Git-specific error types.
//!
//! This module defines error types for git subprocess invocations:
//! - [`GitError`] - All git-related errors with user-friendly messages

use thiserror::Error;

/// Errors specific to git subprocess invocations.
#[derive(Error, Debug)]
pub enum GitError {
    /// The git binary could not be spawned at all.
    #[error("Failed to launch '{binary}': {source}. Is git installed and on PATH?")]
    LaunchFailed {
        /// The binary that was invoked.
        binary: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// git exited with a non-zero status.
    #[error("git {command} failed: {stderr}")]
    CommandFailed {
        /// The git subcommand and arguments that were run.
        command: String,
        /// Trimmed stderr from the failed invocation.
        stderr: String,
    },

    /// git did not finish within the configured timeout.
    #[error("git {command} timed out after {secs}s")]
    Timeout {
        /// The git subcommand and arguments that were run.
        command: String,
        /// The timeout that was exceeded.
        secs: u64,
    },
}

impl GitError {
    /// Checks if this error is a push rejection for lack of an upstream.
    ///
    /// The pusher retries exactly once with `--set-upstream` when this
    /// returns `true`.
    #[must_use]
    pub fn is_missing_upstream(&self) -> bool {
        match self {
            Self::CommandFailed { stderr, .. } => {
                stderr.contains("has no upstream branch") || stderr.contains("--set-upstream")
            }
            _ => false,
        }
    }

    /// Checks if this error is a pull on a branch with no upstream.
    ///
    /// The updater classifies such branches as skipped rather than failed.
    #[must_use]
    pub fn is_no_tracking_information(&self) -> bool {
        match self {
            Self::CommandFailed { stderr, .. } => stderr.contains("no tracking information"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_failed(stderr: &str) -> GitError {
        GitError::CommandFailed {
            command: "push origin topic".to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn is_missing_upstream_matches_git_phrasing() {
        let err = command_failed(
            "fatal: The current branch topic has no upstream branch.\n\
             To push the current branch and set the remote as upstream, use\n\
             \n    git push --set-upstream origin topic",
        );
        assert!(err.is_missing_upstream());
    }

    #[test]
    fn is_missing_upstream_false_for_other_failures() {
        assert!(!command_failed("error: failed to push some refs").is_missing_upstream());
        assert!(!GitError::Timeout {
            command: "push".to_string(),
            secs: 300
        }
        .is_missing_upstream());
    }

    #[test]
    fn is_no_tracking_information_matches_git_phrasing() {
        let err = command_failed(
            "There is no tracking information for the current branch.\n\
             Please specify which branch you want to merge with.",
        );
        assert!(err.is_no_tracking_information());
    }

    #[test]
    fn is_no_tracking_information_false_for_other_failures() {
        assert!(!command_failed("fatal: Not possible to fast-forward, aborting.")
            .is_no_tracking_information());
    }

    #[test]
    fn error_messages_are_user_friendly() {
        let launch = GitError::LaunchFailed {
            binary: "git".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(launch.to_string().contains("Is git installed"));

        let timeout = GitError::Timeout {
            command: "fetch --all".to_string(),
            secs: 300,
        };
        assert!(timeout.to_string().contains("300s"));
        assert!(timeout.to_string().contains("fetch --all"));

        let failed = command_failed("fatal: repository not found");
        assert!(failed.to_string().contains("repository not found"));
    }
}
