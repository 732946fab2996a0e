//! git-branch-tools - Batch git branch maintenance.
//!
//! Two utilities built on a shared library: `update_all_git_branches`
//! scans a directory tree for git repositories and fast-forwards every
//! local branch; `push_all_git_branches` pushes local branches to their
//! remote. All git work is delegated to the installed `git` binary
//! through the [`git::GitOperations`] abstraction.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod prompt;
pub mod scanner;

pub use error::{BranchToolsError, Result};
