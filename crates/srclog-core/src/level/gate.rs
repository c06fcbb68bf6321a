//! Level configuration and the enablement check

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::severity::Severity;
use crate::config::{ConfigError, ConfigResult};

/// Which severities a logger emits
///
/// The three variants correspond to the three accepted input forms:
/// a single threshold name, a comma separated list, and the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelConfig {
    /// Everything at or above this severity
    Threshold(Severity),
    /// Exactly these severities
    Only(BTreeSet<Severity>),
    /// Every severity
    All,
}

impl Default for LevelConfig {
    fn default() -> Self {
        LevelConfig::Threshold(Severity::Warning)
    }
}

impl LevelConfig {
    /// Parse a level configuration string
    ///
    /// - any `*` in the input enables everything
    /// - `"warn,error"` enables exactly those severities
    /// - `"notice"` enables notice and everything more urgent
    ///
    /// Names are case-insensitive and aliases are canonicalised.
    pub fn parse(input: &str) -> ConfigResult<LevelConfig> {
        let trimmed = input.trim();

        if trimmed.contains('*') {
            return Ok(LevelConfig::All);
        }

        if trimmed.contains(',') {
            let mut enabled = BTreeSet::new();
            for entry in trimmed.split(',') {
                let entry = entry.trim();
                if entry.is_empty() {
                    return Err(ConfigError::EmptyLevelEntry(input.to_string()));
                }
                let severity = Severity::parse(entry)
                    .ok_or_else(|| ConfigError::InvalidLevel(entry.to_string()))?;
                enabled.insert(severity);
            }
            return Ok(LevelConfig::Only(enabled));
        }

        Severity::parse(trimmed)
            .map(LevelConfig::Threshold)
            .ok_or_else(|| ConfigError::InvalidLevel(input.to_string()))
    }

    /// Check whether a severity passes this configuration
    pub fn is_enabled(&self, requested: Severity) -> bool {
        match self {
            LevelConfig::Threshold(threshold) => requested >= *threshold,
            LevelConfig::Only(enabled) => enabled.contains(&requested),
            LevelConfig::All => true,
        }
    }

    /// Check a severity given by name; unknown names are never enabled
    pub fn is_enabled_name(&self, requested: &str) -> bool {
        Severity::parse(requested).is_some_and(|s| self.is_enabled(s))
    }
}

/// Free-function form of [`LevelConfig::is_enabled`]
pub fn is_enabled(configured: &LevelConfig, requested: Severity) -> bool {
    configured.is_enabled(requested)
}

impl FromStr for LevelConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelConfig::parse(s)
    }
}

impl fmt::Display for LevelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelConfig::Threshold(severity) => write!(f, "{}", severity),
            LevelConfig::Only(enabled) => {
                let names: Vec<&str> = enabled.iter().map(|s| s.as_str()).collect();
                f.write_str(&names.join(","))
            }
            LevelConfig::All => f.write_str("*"),
        }
    }
}
