//! Update command handler for `update_all_git_branches`.
//!
//! For every discovered repository: fetch, fast-forward each local branch
//! from its upstream, and offer to create tracking branches for branches
//! that only exist on the remote.

use std::collections::BTreeSet;
use std::path::Path;

use crate::cli::args::UpdateArgs;
use crate::config::BranchToolsConfig;
use crate::error::Result;
use crate::git::{GitOperations, PullOutcome};
use crate::prompt::{Choice, Prompter};

/// Per-repository tally of branch operations.
#[derive(Debug, Default, Clone, Copy)]
struct RepoStats {
    updated: usize,
    up_to_date: usize,
    skipped: usize,
    failed: usize,
    tracked: usize,
}

/// Handles the `update_all_git_branches` run.
///
/// Returns `Ok(true)` when every attempted operation succeeded and
/// `Ok(false)` when the run completed with at least one failure. Only
/// usage and configuration problems surface as `Err`.
///
/// # Errors
///
/// Returns an error if the scan root is missing or not a directory.
pub async fn handle_update(
    git: &dyn GitOperations,
    prompter: &dyn Prompter,
    args: &UpdateArgs,
    config: &BranchToolsConfig,
) -> Result<bool> {
    let root = super::resolve_root(&args.path)?;
    let repos = super::collect_repositories(&root, config.scan.max_depth);

    if repos.is_empty() {
        println!("No git repositories found.");
        return Ok(true);
    }
    println!("Found {} git repositories.", repos.len());

    let mut failures = 0;
    for repo in &repos {
        let stats = update_repo(git, prompter, repo, args.auto_track).await;
        failures += stats.failed;
    }

    println!();
    if failures == 0 {
        println!("All repositories processed.");
    } else {
        println!("All repositories processed, {failures} operations failed.");
    }
    Ok(failures == 0)
}

/// Updates one repository. Failures are tallied, never propagated, so a
/// broken repository cannot take down the rest of the batch.
async fn update_repo(
    git: &dyn GitOperations,
    prompter: &dyn Prompter,
    repo: &Path,
    auto_track: bool,
) -> RepoStats {
    println!("\n{}", repo.display());
    let mut stats = RepoStats::default();

    let original_branch = match git.current_branch(repo).await {
        Ok(branch) => branch,
        Err(e) => {
            println!("  cannot read repository state: {e}");
            stats.failed += 1;
            return stats;
        }
    };
    if let Some(branch) = &original_branch {
        println!("  current branch: {branch}");
    }

    println!("  fetching remotes...");
    if let Err(e) = git.fetch_all(repo, true).await {
        println!("  fetch failed: {e}");
        stats.failed += 1;
        return stats;
    }

    let local = match git.local_branches(repo).await {
        Ok(branches) => branches,
        Err(e) => {
            println!("  cannot list local branches: {e}");
            stats.failed += 1;
            return stats;
        }
    };
    let remote = match git.remote_branches(repo).await {
        Ok(branches) => branches,
        Err(e) => {
            println!("  cannot list remote branches: {e}");
            stats.failed += 1;
            return stats;
        }
    };
    println!(
        "  {} local branches, {} remote branches",
        local.len(),
        remote.len()
    );

    let mut local_names: Vec<&str> = local.iter().map(|b| b.name.as_str()).collect();
    local_names.sort_unstable();

    for branch in &local_names {
        update_branch(git, repo, branch, &mut stats).await;
    }

    let local_set: BTreeSet<&str> = local_names.iter().copied().collect();
    let mut remote_only: Vec<&str> = remote
        .iter()
        .map(String::as_str)
        .filter(|name| !local_set.contains(name))
        .collect();
    remote_only.sort_unstable();

    if !remote_only.is_empty() {
        create_tracking_branches(git, prompter, repo, &remote_only, auto_track, &mut stats).await;
    }

    // Best effort; a restore failure is reported but not counted.
    if let Some(branch) = &original_branch {
        if let Err(e) = git.checkout(repo, branch).await {
            println!("  could not switch back to {branch}: {e}");
        }
    }

    println!(
        "  updated: {}, up to date: {}, skipped: {}, tracked: {}, failed: {}",
        stats.updated, stats.up_to_date, stats.skipped, stats.tracked, stats.failed
    );
    stats
}

/// Checks out one branch and fast-forwards it from its upstream.
async fn update_branch(git: &dyn GitOperations, repo: &Path, branch: &str, stats: &mut RepoStats) {
    if let Err(e) = git.checkout(repo, branch).await {
        println!("  {branch} - checkout failed: {e}");
        stats.failed += 1;
        return;
    }

    match git.pull_fast_forward(repo).await {
        Ok(PullOutcome::FastForwarded) => {
            println!("  {branch} - updated");
            stats.updated += 1;
        }
        Ok(PullOutcome::UpToDate) => {
            println!("  {branch} - already up to date");
            stats.up_to_date += 1;
        }
        Err(e) if e.is_no_tracking_information() => {
            println!("  {branch} - skipped (no upstream)");
            stats.skipped += 1;
        }
        Err(e) => {
            println!("  {branch} - pull failed: {e}");
            stats.failed += 1;
        }
    }
}

/// Creates local tracking branches for remote-only branches.
///
/// Without `auto_track`, nothing is created unless the user explicitly
/// confirms: `all` takes every branch, `y` asks again per branch.
async fn create_tracking_branches(
    git: &dyn GitOperations,
    prompter: &dyn Prompter,
    repo: &Path,
    remote_only: &[&str],
    auto_track: bool,
    stats: &mut RepoStats,
) {
    println!("  {} remote-only branches:", remote_only.len());
    for branch in remote_only {
        println!("    {branch}");
    }

    let selected: Vec<&str> = if auto_track {
        remote_only.to_vec()
    } else {
        match prompter.confirm_each("  Create these tracking branches?") {
            Choice::All => remote_only.to_vec(),
            Choice::Yes => {
                let mut picked = Vec::new();
                for branch in remote_only {
                    if prompter.confirm(&format!("    Create {branch}?")) {
                        picked.push(*branch);
                    }
                }
                picked
            }
            Choice::No => Vec::new(),
        }
    };

    for branch in selected {
        match git.create_tracking_branch(repo, branch).await {
            Ok(()) => {
                println!("  {branch} - tracking branch created");
                stats.tracked += 1;
            }
            Err(e) => {
                println!("  {branch} - tracking branch failed: {e}");
                stats.failed += 1;
            }
        }
    }
}
