//! Command handlers for the two binaries.

pub mod push;
pub mod update;

pub use push::handle_push;
pub use update::handle_update;

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{BranchToolsError, Result};
use crate::scanner::find_repositories;

/// Validates the scan root and turns it into an absolute path.
pub(crate) fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(BranchToolsError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(BranchToolsError::NotADirectory(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}

/// Runs the scanner, logging unreadable directories and keeping going.
pub(crate) fn collect_repositories(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    println!("Scanning {}", root.display());

    let mut repos = Vec::new();
    for item in find_repositories(root, max_depth) {
        match item {
            Ok(repo) => {
                println!("  found {}", repo.display());
                repos.push(repo);
            }
            Err(e) => warn!("skipping: {e}"),
        }
    }
    repos
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_root_rejects_missing_path() {
        let err = resolve_root(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, BranchToolsError::PathNotFound(_)));
        assert!(err.is_usage_error());
    }

    #[test]
    fn resolve_root_rejects_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "not a directory").unwrap();

        let err = resolve_root(&file).unwrap_err();
        assert!(matches!(err, BranchToolsError::NotADirectory(_)));
    }

    #[test]
    fn resolve_root_canonicalizes() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_root(dir.path()).unwrap();
        assert!(resolved.is_absolute());
    }
}
