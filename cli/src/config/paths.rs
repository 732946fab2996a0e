//! Platform-specific path utilities for git-branch-tools.

use std::path::PathBuf;

use crate::error::{BranchToolsError, Result};

/// Get the configuration directory for git-branch-tools.
///
/// - Linux: `~/.config/git-branch-tools`
/// - macOS: `~/Library/Application Support/git-branch-tools`
/// - Windows: `%APPDATA%\git-branch-tools`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| BranchToolsError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join("git-branch-tools"))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
