//! Syslog (RFC 5424) severities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Log severity, ordered by ascending urgency
///
/// Ten names are accepted on input but only eight values exist:
/// `err` is an alias of `error` and `warn` is an alias of `warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Notice,
    #[serde(alias = "warn")]
    Warning,
    #[serde(alias = "err")]
    Error,
    Crit,
    Alert,
    Emerg,
}

impl Severity {
    /// Every canonical severity, least urgent first
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Crit,
        Severity::Alert,
        Severity::Emerg,
    ];

    /// Parse a severity name, ignoring case and surrounding whitespace
    ///
    /// Returns `None` for names that are not one of the ten accepted names.
    pub fn parse(name: &str) -> Option<Severity> {
        match name.trim().to_lowercase().as_str() {
            "debug" => Some(Severity::Debug),
            "info" => Some(Severity::Info),
            "notice" => Some(Severity::Notice),
            "warning" | "warn" => Some(Severity::Warning),
            "error" | "err" => Some(Severity::Error),
            "crit" => Some(Severity::Crit),
            "alert" => Some(Severity::Alert),
            "emerg" => Some(Severity::Emerg),
            _ => None,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Crit => "crit",
            Severity::Alert => "alert",
            Severity::Emerg => "emerg",
        }
    }
}

/// Map a severity name onto its canonical spelling
///
/// `canonicalize("ERR")` and `canonicalize("error")` both give `Some("error")`.
/// Applying it to its own output returns the same value.
pub fn canonicalize(name: &str) -> Option<&'static str> {
    Severity::parse(name).map(|s| s.as_str())
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(s).ok_or_else(|| ConfigError::InvalidLevel(s.to_string()))
    }
}
