//! Environment and file based logger configuration
//!
//! Supports `PROJECT_ROOT` / `LOG_LEVEL` environment variables and a small YAML file:
//!
//! ```yaml
//! project_root: /srv/app/
//! log_level: notice
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::level::LevelConfig;
use crate::path::{ProjectRoot, PROJECT_ROOT_ENV};

/// Environment variable holding the level configuration
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Unvalidated logger configuration
///
/// Empty strings count as unset, matching how shells commonly "unset" a
/// variable with `LOG_LEVEL=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl LoggerConfig {
    /// Read `PROJECT_ROOT` and `LOG_LEVEL` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            project_root: non_empty(PROJECT_ROOT_ENV),
            log_level: non_empty(LOG_LEVEL_ENV),
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Load a YAML file; a missing file yields an empty configuration
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Overlay `other` on top of `self`; values set in `other` win
    pub fn merge(self, other: LoggerConfig) -> Self {
        Self {
            project_root: other.project_root.or(self.project_root),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Validate the level and settle on a project root
    ///
    /// Without an explicit root this falls back to [`ProjectRoot::shared`],
    /// so the first caller in the process decides the root for everyone.
    #[track_caller]
    pub fn resolve(&self) -> ConfigResult<LoggerSettings> {
        let root = match &self.project_root {
            Some(root) => ProjectRoot::new(root.clone()),
            None => ProjectRoot::shared(),
        };
        self.resolve_with_root(root)
    }

    /// Validate the level, using `fallback_root` when no root is configured
    pub fn resolve_with_root(&self, fallback_root: ProjectRoot) -> ConfigResult<LoggerSettings> {
        let level = match &self.log_level {
            Some(level) => LevelConfig::parse(level)?,
            None => LevelConfig::default(),
        };
        let project_root = self
            .project_root
            .as_ref()
            .map(|r| ProjectRoot::new(r.clone()))
            .unwrap_or(fallback_root);
        Ok(LoggerSettings { project_root, level })
    }
}

/// Validated settings shared by every logger in an application
///
/// Loggers copy what they need at construction; changing the environment
/// afterwards has no effect on loggers that already exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerSettings {
    pub project_root: ProjectRoot,
    pub level: LevelConfig,
}

impl LoggerSettings {
    pub fn new(project_root: ProjectRoot, level: LevelConfig) -> Self {
        Self { project_root, level }
    }
}
