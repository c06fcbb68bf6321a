//! srclog Core
//!
//! Source-labelled, level-gated logging that forwards to a pluggable sink.
//! This crate provides the core functionality that can be used from any environment
//! (native Rust, Node.js via napi-rs, etc.)
//!
//! ## Overview
//!
//! Each module that logs owns a [`SourceLogger`]. The logger labels every line
//! with its source path relative to the project root, drops calls the level
//! configuration does not enable, and hands the formatted line to a [`Sink`].
//!
//! ```rust
//! use std::sync::Arc;
//! use srclog_core::{ConsoleSink, Log, LoggerConfig, ProjectRoot, RequestContext, SourceLogger};
//!
//! // Resolve settings once at start-up
//! let settings = LoggerConfig::from_env()
//!     .resolve_with_root(ProjectRoot::new(env!("CARGO_MANIFEST_DIR")))
//!     .expect("invalid LOG_LEVEL");
//!
//! let logger = SourceLogger::new(Some(file!()), &settings, Arc::new(ConsoleSink::new()));
//! logger.warning("disk almost full", None);
//!
//! // Per-request correlation id
//! let ctx = RequestContext::new("abc-123");
//! logger.with_context(&ctx).error("request failed", None);
//! ```

pub mod level;
pub mod path;
pub mod record;
pub mod sink;
pub mod config;
pub mod logger;

// Re-export commonly used types
pub use level::{Severity, LevelConfig, canonicalize, is_enabled};

pub use path::{ProjectRoot, resolve_display_name, longest_common_prefix, UNKNOWN_SOURCE};

pub use record::{
    LogMessage, ErrorDetails, LogRecord, Metadata,
    ContextProvider, RequestContext, NoContext,
};

pub use sink::{
    Sink, SharedSink,
    ConsoleSink, FileSink, TracingSink, FanoutSink, MemorySink, NoOpSink,
};

pub use config::{ConfigError, ConfigResult, LoggerConfig, LoggerSettings};

pub use logger::{Log, SourceLogger, ScopedLogger};
