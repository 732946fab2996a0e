//! Git-related types for git-branch-tools.
//!
//! This module defines data structures for git operations:
//! - [`Branch`] - A local branch with its upstream and divergence data
//! - [`PullOutcome`] - Result classification for a fast-forward pull
//! - [`PushOutcome`] - Result classification for a push
//! - [`PushOptions`] - Options for pushing a branch

/// A local branch as reported by `git branch --format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Short branch name (e.g. `main`, `feature/login`).
    pub name: String,

    /// Upstream ref in short form (e.g. `origin/main`), if configured.
    pub upstream: Option<String>,

    /// Commits ahead of the upstream (0 when untracked).
    pub ahead: usize,

    /// Commits behind the upstream (0 when untracked).
    pub behind: usize,
}

impl Branch {
    /// Returns true if this branch tracks a remote branch.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.upstream.is_some()
    }

    /// Returns true if the branch and its upstream have divergent history.
    #[must_use]
    pub const fn is_diverged(&self) -> bool {
        self.ahead > 0 && self.behind > 0
    }
}

/// Result of a successful fast-forward pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// The branch pointer moved forward.
    FastForwarded,
    /// The branch was already at the upstream tip.
    UpToDate,
}

/// Result of a successful push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Commits were uploaded to an existing remote branch.
    Pushed,
    /// A new remote branch was created.
    NewBranch,
    /// The remote already had everything.
    UpToDate,
}

/// Options for pushing a branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushOptions {
    /// Allow non-fast-forward pushes (overwrites remote history).
    pub force: bool,

    /// Pass `--set-upstream` so the branch starts tracking the remote.
    pub set_upstream: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_is_tracking() {
        let tracked = Branch {
            name: "main".to_string(),
            upstream: Some("origin/main".to_string()),
            ahead: 0,
            behind: 0,
        };
        assert!(tracked.is_tracking());

        let local_only = Branch {
            name: "wip".to_string(),
            upstream: None,
            ahead: 0,
            behind: 0,
        };
        assert!(!local_only.is_tracking());
    }

    #[test]
    fn branch_is_diverged() {
        let base = Branch {
            name: "main".to_string(),
            upstream: Some("origin/main".to_string()),
            ahead: 0,
            behind: 0,
        };
        assert!(!base.is_diverged());

        let ahead_only = Branch { ahead: 2, ..base.clone() };
        assert!(!ahead_only.is_diverged());

        let behind_only = Branch { behind: 3, ..base.clone() };
        assert!(!behind_only.is_diverged());

        let diverged = Branch {
            ahead: 1,
            behind: 1,
            ..base
        };
        assert!(diverged.is_diverged());
    }

    #[test]
    fn push_options_default() {
        let opts = PushOptions::default();
        assert!(!opts.force);
        assert!(!opts.set_upstream);
    }
}
