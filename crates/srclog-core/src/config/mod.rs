//! Logger configuration
//!
//! - `LoggerConfig`: raw, optional settings from the environment or a YAML file
//! - `LoggerSettings`: the validated values each logger is built from

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{LoggerConfig, LoggerSettings, LOG_LEVEL_ENV};
