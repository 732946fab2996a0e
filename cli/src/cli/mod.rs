//! CLI module for git-branch-tools.

pub mod args;
pub mod commands;

pub use args::{PushArgs, UpdateArgs};
