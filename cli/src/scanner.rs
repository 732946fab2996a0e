//! Repository discovery for git-branch-tools.
//!
//! Walks a directory tree depth-first and yields every directory that
//! contains a `.git` entry. The walk is lazy, deterministic (children are
//! visited in sorted order), and tolerant of unreadable directories.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A directory that could not be read during the scan.
///
/// Yielded through the iterator so callers can log and continue; a
/// permission error never aborts the walk.
#[derive(Error, Debug)]
#[error("Cannot read directory {}: {source}", .path.display())]
pub struct ScanError {
    /// The directory that failed.
    pub path: PathBuf,
    /// The underlying io error.
    #[source]
    pub source: std::io::Error,
}

/// Lazy iterator over git repository roots under a starting directory.
///
/// Created by [`find_repositories`]. Repositories themselves are not
/// descended into, so nested checkouts (e.g. vendored trees) below a
/// repository root are not reported. Hidden directories are skipped and
/// directory symlinks are not followed.
pub struct RepoWalker {
    // Pending directories with their depth, in reverse-sorted order so
    // popping yields sorted traversal.
    stack: Vec<(PathBuf, usize)>,
    max_depth: Option<usize>,
}

/// Starts a repository scan rooted at `root`.
///
/// `max_depth` bounds the recursion (`Some(0)` checks only the root
/// itself); `None` is unlimited.
pub fn find_repositories(root: &Path, max_depth: Option<usize>) -> RepoWalker {
    RepoWalker {
        stack: vec![(root.to_path_buf(), 0)],
        max_depth,
    }
}

impl RepoWalker {
    fn push_children(&mut self, dir: &Path, depth: usize) -> Result<(), ScanError> {
        let entries = fs::read_dir(dir).map_err(|source| ScanError {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError {
                path: dir.to_path_buf(),
                source,
            })?;

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                // A vanished entry is not worth failing the directory for.
                Err(_) => continue,
            };
            if !file_type.is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            children.push(entry.path());
        }

        children.sort();
        for child in children.into_iter().rev() {
            self.stack.push((child, depth));
        }

        Ok(())
    }
}

impl Iterator for RepoWalker {
    type Item = Result<PathBuf, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((dir, depth)) = self.stack.pop() {
            if dir.join(".git").exists() {
                return Some(Ok(dir));
            }

            if self.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            if let Err(e) = self.push_children(&dir, depth + 1) {
                return Some(Err(e));
            }
        }

        None
    }
}
