//! Git operations module for git-branch-tools.
//!
//! Provides the structured subprocess abstraction over the installed git
//! binary:
//! - Branch enumeration (local and remote)
//! - Fetch, fast-forward pull, push
//! - Tracking-branch creation and working-tree status

pub mod error;
pub mod operations;
pub mod types;

pub use error::GitError;
pub use operations::{GitOperations, ProcessGit};
pub use types::{Branch, PullOutcome, PushOptions, PushOutcome};

#[cfg(test)]
pub use operations::MockGitOperations;
