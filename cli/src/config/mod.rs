//! Configuration management for git-branch-tools.

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::{BranchToolsConfig, GitConfig, ScanConfig};

use std::path::Path;

use crate::error::Result;

/// Load configuration from the default config file.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load_config() -> Result<BranchToolsConfig> {
    let path = config_file()?;
    load_config_from(&path)
}

/// Load configuration from a specific path.
///
/// If the file doesn't exist, returns default configuration.
pub fn load_config_from(path: &Path) -> Result<BranchToolsConfig> {
    if !path.exists() {
        return Ok(BranchToolsConfig::default().with_env_overrides());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: BranchToolsConfig = toml::from_str(&contents)?;

    Ok(config.with_env_overrides())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.git.binary, "git");
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [git]
            timeout_secs = 60

            [scan]
            max_depth = 2
            "#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.git.timeout_secs, 60);
        assert_eq!(config.scan.max_depth, Some(2));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[git\nbroken").unwrap();

        assert!(load_config_from(&path).is_err());
    }
}
