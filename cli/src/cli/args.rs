//! Command-line argument parsing.
//!
//! One parser per binary: [`UpdateArgs`] for `update_all_git_branches`
//! and [`PushArgs`] for `push_all_git_branches`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::settings::env;

const UPDATE_EXAMPLES: &str = "\
Examples:
  update_all_git_branches                   Scan and update under the current directory
  update_all_git_branches ~/projects       Scan and update under ~/projects
  update_all_git_branches --auto-track     Create every remote tracking branch without asking
  update_all_git_branches ~/projects -a    Both of the above";

const PUSH_EXAMPLES: &str = "\
Examples:
  push_all_git_branches                     Push local-only branches under the current directory
  push_all_git_branches ~/projects         Same, under ~/projects
  push_all_git_branches --all              Push every local branch
  push_all_git_branches --force            Force push (can overwrite remote history!)
  push_all_git_branches --no-check         Skip the uncommitted-changes check
  push_all_git_branches ~/projects -a -f   All branches, forced";

/// Update every local branch of every git repository under a directory.
///
/// Walks the given directory recursively, and for each git repository
/// found fetches the remotes and fast-forwards each local branch from its
/// upstream. Remote branches without a local counterpart can be turned
/// into local tracking branches, either interactively or automatically.
#[derive(Parser, Debug)]
#[command(name = "update_all_git_branches")]
#[command(version, about, after_help = UPDATE_EXAMPLES)]
pub struct UpdateArgs {
    /// Root directory to scan for git repositories.
    #[arg(default_value = ".", env = env::ROOT)]
    pub path: PathBuf,

    /// Create a tracking branch for every remote-only branch without asking.
    #[arg(short = 'a', long)]
    pub auto_track: bool,
}

/// Push every local branch of every git repository under a directory.
///
/// Walks the given directory recursively, and for each git repository
/// found pushes local branches to origin. By default only branches that
/// do not yet exist on the remote are pushed; --all pushes everything.
#[derive(Parser, Debug)]
#[command(name = "push_all_git_branches")]
#[command(version, about, after_help = PUSH_EXAMPLES)]
pub struct PushArgs {
    /// Root directory to scan for git repositories.
    #[arg(default_value = ".", env = env::ROOT)]
    pub path: PathBuf,

    /// Push all local branches, including those already on the remote.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Force push. DESTRUCTIVE: may overwrite remote history.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Skip the uncommitted-changes check before pushing each repository.
    #[arg(long)]
    pub no_check: bool,
}
