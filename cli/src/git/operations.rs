//! Git operations abstraction for git-branch-tools.
//!
//! This module provides a trait-based abstraction over git operations:
//! - [`GitOperations`] - Trait defining the git operations the tools need
//! - [`ProcessGit`] - Implementation shelling out to the installed git binary

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::GitConfig;
use crate::git::error::GitError;
use crate::git::types::{Branch, PullOutcome, PushOptions, PushOutcome};

/// Trait for git operations (enables mocking in tests).
///
/// Every method targets a single repository identified by its path; no
/// state is carried between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitOperations: Send + Sync {
    /// Fetches all remotes, optionally pruning deleted remote branches.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails (network, auth, not a repo).
    async fn fetch_all(&self, repo: &Path, prune: bool) -> Result<(), GitError>;

    /// Gets the currently checked-out branch, or `None` on detached HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository state cannot be read.
    async fn current_branch(&self, repo: &Path) -> Result<Option<String>, GitError>;

    /// Lists local branches with upstream and ahead/behind information.
    ///
    /// # Errors
    ///
    /// Returns an error if branch enumeration fails.
    async fn local_branches(&self, repo: &Path) -> Result<Vec<Branch>, GitError>;

    /// Lists branch names on the configured remote, prefix stripped.
    ///
    /// The symbolic `HEAD` entry and branches of other remotes are excluded.
    ///
    /// # Errors
    ///
    /// Returns an error if branch enumeration fails.
    async fn remote_branches(&self, repo: &Path) -> Result<Vec<String>, GitError>;

    /// Checks out an existing local branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout fails (e.g. conflicting changes).
    async fn checkout(&self, repo: &Path, branch: &str) -> Result<(), GitError>;

    /// Runs `git pull --ff-only` on the currently checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns an error on divergent history, missing upstream, or
    /// network failure. Use [`GitError::is_no_tracking_information`] to
    /// distinguish untracked branches from real failures.
    async fn pull_fast_forward(&self, repo: &Path) -> Result<PullOutcome, GitError>;

    /// Creates a local branch tracking `<remote>/<branch>` and checks it out.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch already exists or the remote ref is
    /// missing.
    async fn create_tracking_branch(&self, repo: &Path, branch: &str) -> Result<(), GitError>;

    /// Pushes one branch to the configured remote without checking it out.
    ///
    /// # Errors
    ///
    /// Returns an error on rejection (non-fast-forward without force,
    /// missing upstream, auth). Use [`GitError::is_missing_upstream`] to
    /// detect the retry-with-`--set-upstream` case.
    async fn push(
        &self,
        repo: &Path,
        branch: &str,
        options: PushOptions,
    ) -> Result<PushOutcome, GitError>;

    /// Checks whether the working tree has uncommitted changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be determined.
    async fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool, GitError>;
}

/// Branch listing format: name, upstream, and track status, tab-separated.
const BRANCH_FORMAT: &str = "--format=%(refname:short)%09%(upstream:short)%09%(upstream:track)";

/// Git operations implementation invoking the git binary as a subprocess.
pub struct ProcessGit {
    binary: String,
    remote: String,
    timeout: Duration,
}

impl ProcessGit {
    /// Creates an instance from the `[git]` configuration section.
    #[must_use]
    pub fn new(config: &GitConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            remote: config.remote.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Runs `git -C <repo> <args>` and captures its output.
    ///
    /// `GIT_TERMINAL_PROMPT=0` keeps a credential prompt from hanging the
    /// batch; `LC_ALL=C` pins the English phrases the outcome
    /// classification relies on.
    async fn run(&self, repo: &Path, args: &[&str]) -> Result<String, GitError> {
        let command = args.join(" ");

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-C")
            .arg(repo)
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(repo = %repo.display(), %command, "running git");

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| GitError::Timeout {
                command: command.clone(),
                secs: self.timeout.as_secs(),
            })?
            .map_err(|source| GitError::LaunchFailed {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(GitError::CommandFailed {
                command,
                stderr: detail.to_string(),
            });
        }

        // git splits human-readable output across stdout and stderr
        // (push progress goes to stderr), so classification sees both.
        Ok(format!("{}\n{}", stdout.trim(), stderr.trim()))
    }
}

#[async_trait]
impl GitOperations for ProcessGit {
    async fn fetch_all(&self, repo: &Path, prune: bool) -> Result<(), GitError> {
        let mut args = vec!["fetch", "--all"];
        if prune {
            args.push("--prune");
        }
        self.run(repo, &args).await?;
        Ok(())
    }

    async fn current_branch(&self, repo: &Path) -> Result<Option<String>, GitError> {
        let output = self.run(repo, &["branch", "--show-current"]).await?;
        let name = output.trim();
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name.to_string()))
        }
    }

    async fn local_branches(&self, repo: &Path) -> Result<Vec<Branch>, GitError> {
        let output = self.run(repo, &["branch", BRANCH_FORMAT]).await?;
        Ok(output.lines().filter_map(parse_branch_line).collect())
    }

    async fn remote_branches(&self, repo: &Path) -> Result<Vec<String>, GitError> {
        let output = self
            .run(repo, &["branch", "-r", "--format=%(refname:short)"])
            .await?;
        Ok(output
            .lines()
            .filter_map(|line| parse_remote_line(line, &self.remote))
            .collect())
    }

    async fn checkout(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.run(repo, &["checkout", branch]).await?;
        Ok(())
    }

    async fn pull_fast_forward(&self, repo: &Path) -> Result<PullOutcome, GitError> {
        let output = self.run(repo, &["pull", "--ff-only"]).await?;
        Ok(classify_pull(&output))
    }

    async fn create_tracking_branch(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        let remote_ref = format!("{}/{}", self.remote, branch);
        self.run(repo, &["checkout", "-b", branch, &remote_ref])
            .await?;
        Ok(())
    }

    async fn push(
        &self,
        repo: &Path,
        branch: &str,
        options: PushOptions,
    ) -> Result<PushOutcome, GitError> {
        let mut args = vec!["push"];
        if options.set_upstream {
            args.push("--set-upstream");
        }
        args.push(&self.remote);
        args.push(branch);
        if options.force {
            args.push("--force");
        }

        let output = self.run(repo, &args).await?;
        Ok(classify_push(&output))
    }

    async fn has_uncommitted_changes(&self, repo: &Path) -> Result<bool, GitError> {
        let output = self.run(repo, &["status", "--porcelain"]).await?;
        Ok(!output.trim().is_empty())
    }
}

/// Parses one line of `git branch` output in [`BRANCH_FORMAT`].
fn parse_branch_line(line: &str) -> Option<Branch> {
    let mut fields = line.split('\t');
    let name = fields.next()?.trim();
    // Detached HEAD shows up as a parenthesized pseudo-entry.
    if name.is_empty() || name.starts_with('(') {
        return None;
    }

    let upstream = fields.next().unwrap_or("").trim();
    let (ahead, behind) = parse_track(fields.next().unwrap_or(""));

    Some(Branch {
        name: name.to_string(),
        upstream: if upstream.is_empty() {
            None
        } else {
            Some(upstream.to_string())
        },
        ahead,
        behind,
    })
}

/// Parses an `%(upstream:track)` field like `[ahead 1, behind 2]`.
///
/// Empty fields and `[gone]` yield `(0, 0)`.
fn parse_track(track: &str) -> (usize, usize) {
    let inner = track.trim().trim_start_matches('[').trim_end_matches(']');

    let mut ahead = 0;
    let mut behind = 0;
    for part in inner.split(',') {
        let part = part.trim();
        if let Some(n) = part.strip_prefix("ahead ") {
            ahead = n.trim().parse().unwrap_or(0);
        } else if let Some(n) = part.strip_prefix("behind ") {
            behind = n.trim().parse().unwrap_or(0);
        }
    }

    (ahead, behind)
}

/// Parses one line of `git branch -r` output, keeping only branches of
/// `remote` with the prefix stripped. The symbolic `HEAD` entry is dropped.
fn parse_remote_line(line: &str, remote: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.contains("->") {
        return None;
    }

    let name = line.strip_prefix(remote)?.strip_prefix('/')?;
    if name == "HEAD" {
        return None;
    }

    Some(name.to_string())
}

/// Classifies successful `git pull --ff-only` output.
fn classify_pull(output: &str) -> PullOutcome {
    // Older git spells it "Already up-to-date."
    if output.contains("Already up to date") || output.contains("Already up-to-date") {
        PullOutcome::UpToDate
    } else {
        PullOutcome::FastForwarded
    }
}

/// Classifies successful `git push` output.
fn classify_push(output: &str) -> PushOutcome {
    if output.contains("Everything up-to-date") {
        PushOutcome::UpToDate
    } else if output.contains("new branch") {
        PushOutcome::NewBranch
    } else {
        PushOutcome::Pushed
    }
}
