//! Push command handler for `push_all_git_branches`.
//!
//! For every discovered repository: push the selected local branches to
//! the remote. The default selection is branches that do not exist on the
//! remote yet; `--all` pushes everything and `--force` allows
//! non-fast-forward pushes.

use std::collections::BTreeSet;
use std::path::Path;

use crate::cli::args::PushArgs;
use crate::config::BranchToolsConfig;
use crate::error::Result;
use crate::git::{GitError, GitOperations, PushOptions, PushOutcome};
use crate::prompt::Prompter;

/// Handles the `push_all_git_branches` run.
///
/// Returns `Ok(true)` when every attempted push succeeded and `Ok(false)`
/// when the run completed with at least one failure.
///
/// # Errors
///
/// Returns an error if the scan root is missing or not a directory.
pub async fn handle_push(
    git: &dyn GitOperations,
    prompter: &dyn Prompter,
    args: &PushArgs,
    config: &BranchToolsConfig,
) -> Result<bool> {
    let root = super::resolve_root(&args.path)?;

    // One up-front confirmation gates the destructive mode for the whole
    // batch; declining does no work at all.
    if args.force {
        println!("WARNING: force push can overwrite remote history!");
        if !prompter.confirm("Continue with force push?") {
            println!("Aborted.");
            return Ok(true);
        }
    }

    let repos = super::collect_repositories(&root, config.scan.max_depth);
    if repos.is_empty() {
        println!("No git repositories found.");
        return Ok(true);
    }
    println!("Found {} git repositories.", repos.len());

    let mut failures = 0;
    for repo in &repos {
        failures += push_repo(git, prompter, repo, args).await;
    }

    println!();
    if failures == 0 {
        println!("All repositories processed.");
    } else {
        println!("All repositories processed, {failures} pushes failed.");
    }
    Ok(failures == 0)
}

/// Pushes one repository, returning the number of failed operations.
async fn push_repo(
    git: &dyn GitOperations,
    prompter: &dyn Prompter,
    repo: &Path,
    args: &PushArgs,
) -> usize {
    println!("\n{}", repo.display());

    if let Ok(Some(branch)) = git.current_branch(repo).await {
        println!("  current branch: {branch}");
    }

    if !args.no_check {
        match git.has_uncommitted_changes(repo).await {
            Ok(true) => {
                println!("  working tree has uncommitted changes");
                if !prompter.confirm("  Push this repository anyway?") {
                    println!("  skipped");
                    return 0;
                }
            }
            Ok(false) => {}
            Err(e) => {
                println!("  cannot check working tree: {e}");
                return 1;
            }
        }
    }

    // Stale remote info only affects branch selection, not safety, so a
    // fetch failure is not fatal here.
    if let Err(e) = git.fetch_all(repo, false).await {
        println!("  fetch failed: {e}; remote information may be stale");
    }

    let local = match git.local_branches(repo).await {
        Ok(branches) => branches,
        Err(e) => {
            println!("  cannot list local branches: {e}");
            return 1;
        }
    };
    let remote = match git.remote_branches(repo).await {
        Ok(branches) => branches,
        Err(e) => {
            println!("  cannot list remote branches: {e}");
            return 1;
        }
    };

    if local.is_empty() {
        println!("  no local branches to push");
        return 0;
    }
    println!(
        "  {} local branches, {} remote branches",
        local.len(),
        remote.len()
    );

    let mut local_names: Vec<&str> = local.iter().map(|b| b.name.as_str()).collect();
    local_names.sort_unstable();

    let remote_set: BTreeSet<&str> = remote.iter().map(String::as_str).collect();
    let mut to_push: Vec<&str> = if args.all {
        local_names.clone()
    } else {
        local_names
            .iter()
            .copied()
            .filter(|name| !remote_set.contains(name))
            .collect()
    };

    if !args.all {
        if to_push.is_empty() {
            println!("  all local branches already exist on the remote");
            if prompter.confirm("  Push updates for the existing branches?") {
                to_push = local_names;
            } else {
                println!("  done");
                return 0;
            }
        } else {
            println!("  {} local-only branches:", to_push.len());
            for branch in &to_push {
                println!("    {branch}");
            }
        }
    }

    let mut pushed = 0;
    let mut failed = 0;
    for branch in to_push {
        match push_branch(git, repo, branch, args.force).await {
            Ok(PushOutcome::Pushed) => {
                println!("  {branch} - pushed");
                pushed += 1;
            }
            Ok(PushOutcome::NewBranch) => {
                println!("  {branch} - pushed (new remote branch)");
                pushed += 1;
            }
            Ok(PushOutcome::UpToDate) => {
                println!("  {branch} - already up to date");
                pushed += 1;
            }
            Err(e) => {
                println!("  {branch} - push failed: {e}");
                failed += 1;
            }
        }
    }

    println!("  pushed: {pushed}, failed: {failed}");
    failed
}

/// Pushes one branch, retrying once with `--set-upstream` when the remote
/// rejects for lack of a configured upstream.
async fn push_branch(
    git: &dyn GitOperations,
    repo: &Path,
    branch: &str,
    force: bool,
) -> std::result::Result<PushOutcome, GitError> {
    let options = PushOptions {
        force,
        set_upstream: false,
    };
    match git.push(repo, branch, options).await {
        Err(e) if e.is_missing_upstream() => {
            println!("  {branch} - no upstream configured, retrying with --set-upstream");
            git.push(
                repo,
                branch,
                PushOptions {
                    force,
                    set_upstream: true,
                },
            )
            .await
        }
        other => other,
    }
}
