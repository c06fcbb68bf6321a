//! Configuration errors

/// Errors raised while building a logger's configuration
///
/// These are the only errors the crate surfaces. Logging calls themselves
/// never fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not a valid log level. Use one syslog level name, a comma separated list of them, or *")]
    InvalidLevel(String),

    #[error("Empty entry in log level list: {0}")]
    EmptyLevelEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
