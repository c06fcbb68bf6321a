//! Severities and level gating
//!
//! - `Severity`: the eight syslog severities (plus the `err` / `warn` aliases)
//! - `LevelConfig`: threshold, explicit list, or wildcard

mod severity;
mod gate;

pub use severity::{Severity, canonicalize};
pub use gate::{LevelConfig, is_enabled};
