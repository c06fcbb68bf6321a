//! Per-component logger handle

use std::fmt;
use std::panic::Location;

use super::scoped::ScopedLogger;
use super::traits::Log;
use crate::config::{ConfigResult, LoggerConfig, LoggerSettings};
use crate::level::{LevelConfig, Severity};
use crate::record::{resolve_request_id, ContextProvider, LogMessage, LogRecord, Metadata};
use crate::sink::SharedSink;

/// Logger for one source file or component
///
/// Create one per module that logs. The display name is worked out once
/// from the source path and the project root; the level starts from the
/// shared settings and can then be changed per handle.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use srclog_core::{Log, LevelConfig, LoggerSettings, MemorySink, ProjectRoot, SourceLogger};
///
/// let sink = Arc::new(MemorySink::new());
/// let settings = LoggerSettings::new(ProjectRoot::new("/srv/app/"), LevelConfig::parse("info").unwrap());
/// let logger = SourceLogger::new(Some("/srv/app/src/db.rs"), &settings, sink.clone());
///
/// logger.info("connected", None);
/// assert_eq!(sink.messages(), vec!["src/db.rs - connected".to_string()]);
/// ```
pub struct SourceLogger {
    display_name: String,
    level: LevelConfig,
    sink: SharedSink,
}

impl SourceLogger {
    /// Create a logger for `source`, which may be a path or a plain label
    pub fn new(source: Option<&str>, settings: &LoggerSettings, sink: SharedSink) -> Self {
        Self {
            display_name: settings.project_root.display_name(source),
            level: settings.level.clone(),
            sink,
        }
    }

    /// Create a logger named after the calling source file
    #[track_caller]
    pub fn for_caller(settings: &LoggerSettings, sink: SharedSink) -> Self {
        Self::new(Some(Location::caller().file()), settings, sink)
    }

    /// Create a logger from `PROJECT_ROOT` / `LOG_LEVEL`
    ///
    /// Fails if `LOG_LEVEL` is set to something that is not a level
    /// configuration. The environment is read once, here.
    #[track_caller]
    pub fn from_env(source: Option<&str>, sink: SharedSink) -> ConfigResult<Self> {
        let settings = LoggerConfig::from_env().resolve()?;
        Ok(Self::new(source, &settings, sink))
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Replace the display name verbatim (no path resolution)
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// Parse and apply a new level configuration
    ///
    /// On error the current configuration is kept.
    pub fn set_level(&mut self, level: &str) -> ConfigResult<()> {
        self.level = LevelConfig::parse(level)?;
        Ok(())
    }

    pub fn set_level_config(&mut self, level: LevelConfig) {
        self.level = level;
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.level.is_enabled(severity)
    }

    /// The sink this logger forwards to
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Borrow this logger with a request context applied to every call
    pub fn with_context<'a>(&'a self, context: &'a dyn ContextProvider) -> ScopedLogger<'a> {
        ScopedLogger::new(self, context)
    }

    /// Human readable description, same as `to_string()`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub(crate) fn emit_with_context(
        &self,
        severity: Severity,
        message: &LogMessage,
        metadata: Option<&Metadata>,
        context: Option<&dyn ContextProvider>,
    ) {
        if !self.level.is_enabled(severity) {
            return;
        }
        let request_id = resolve_request_id(context, metadata);
        let record = LogRecord::new(severity, message, metadata, &self.display_name, request_id);
        self.sink.write_record(&record);
    }
}

impl Log for SourceLogger {
    fn emit(&self, severity: Severity, message: &LogMessage, metadata: Option<&Metadata>) {
        self.emit_with_context(severity, message, metadata, None);
    }
}

impl fmt::Display for SourceLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logger for file: {}", self.display_name)
    }
}

impl fmt::Debug for SourceLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceLogger")
            .field("display_name", &self.display_name)
            .field("level", &self.level)
            .finish()
    }
}
