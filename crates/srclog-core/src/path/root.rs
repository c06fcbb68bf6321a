//! Project root determination

use std::env;
use std::fmt;
use std::panic::Location;

use once_cell::sync::OnceCell;

use super::resolver::{longest_common_prefix, resolve_display_name};

/// Environment variable holding an explicit project root
pub const PROJECT_ROOT_ENV: &str = "PROJECT_ROOT";

/// Process-wide root used by [`ProjectRoot::shared`]
static SHARED_ROOT: OnceCell<ProjectRoot> = OnceCell::new();

/// Prefix stripped from source paths to produce display names
///
/// Resolve one of these when the application starts and hand it to every
/// logger through [`LoggerSettings`](crate::config::LoggerSettings).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectRoot {
    root: String,
}

impl ProjectRoot {
    /// Use an explicit root
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Read the root from `PROJECT_ROOT`, if it is set and non-empty
    pub fn from_env() -> Option<Self> {
        env::var(PROJECT_ROOT_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(Self::new)
    }

    /// Infer the root as the common leading part of two locations
    pub fn infer(a: &str, b: &str) -> Self {
        Self::new(longest_common_prefix(&[a, b]))
    }

    /// Infer the root from this crate's location and the caller's location
    #[track_caller]
    pub fn infer_from_caller() -> Self {
        Self::infer(file!(), Location::caller().file())
    }

    /// Process-wide root, computed once
    ///
    /// `PROJECT_ROOT` wins if set. Otherwise the root is inferred from the
    /// location of whoever calls this first, and every later caller in the
    /// process gets that same value regardless of where it lives. Concurrent
    /// first calls race on a `OnceCell`, so exactly one value is ever stored.
    #[track_caller]
    pub fn shared() -> Self {
        let caller = Location::caller().file();
        SHARED_ROOT
            .get_or_init(|| Self::from_env().unwrap_or_else(|| Self::infer(file!(), caller)))
            .clone()
    }

    /// Whether the root is the empty string (strips nothing)
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.root
    }

    /// Display name for `candidate` relative to this root
    pub fn display_name(&self, candidate: Option<&str>) -> String {
        resolve_display_name(candidate, &self.root)
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)
    }
}
