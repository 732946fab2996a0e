//! Application configuration settings.

use serde::{Deserialize, Serialize};

/// Main configuration for git-branch-tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchToolsConfig {
    /// Git subprocess settings.
    pub git: GitConfig,
    /// Repository scan settings.
    pub scan: ScanConfig,
}

/// Git subprocess configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// The git binary to invoke.
    pub binary: String,
    /// Remote used for tracking branches and pushes.
    pub remote: String,
    /// Per-invocation timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
            remote: "origin".to_string(),
            timeout_secs: 300,
        }
    }
}

/// Repository scan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum directory depth to descend (unlimited when absent).
    pub max_depth: Option<usize>,
}

/// Environment variables that can override configuration.
pub mod env {
    pub const GIT_BINARY: &str = "GIT_BRANCH_TOOLS_GIT_BINARY";
    pub const ROOT: &str = "GIT_BRANCH_TOOLS_ROOT";
    pub const LOG_LEVEL: &str = "GIT_BRANCH_TOOLS_LOG";
}

impl BranchToolsConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(binary) = std::env::var(env::GIT_BINARY) {
            if !binary.trim().is_empty() {
                self.git.binary = binary;
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = BranchToolsConfig::default();
        assert_eq!(config.git.binary, "git");
        assert_eq!(config.git.remote, "origin");
        assert_eq!(config.git.timeout_secs, 300);
        assert!(config.scan.max_depth.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: BranchToolsConfig = toml::from_str(
            r#"
            [git]
            remote = "upstream"
            "#,
        )
        .unwrap();

        assert_eq!(config.git.remote, "upstream");
        assert_eq!(config.git.binary, "git");
        assert_eq!(config.git.timeout_secs, 300);
    }

    #[test]
    fn scan_depth_is_parsed() {
        let config: BranchToolsConfig = toml::from_str(
            r#"
            [scan]
            max_depth = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.scan.max_depth, Some(3));
    }
}
