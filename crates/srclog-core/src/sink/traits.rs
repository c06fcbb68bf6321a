//! Sink trait definition

use std::sync::Arc;

use crate::level::Severity;
use crate::record::{LogRecord, Metadata};

/// Destination for accepted log calls
///
/// Loggers only call a sink after the level gate passed, with a fully
/// formatted message. Sinks must not panic and swallow their own I/O errors.
///
/// Implementations:
/// - `ConsoleSink`: stdout/stderr lines
/// - `FileSink`: appends lines to a file
/// - `TracingSink`: re-emits as `tracing` events
/// - `FanoutSink`: forwards to several sinks
/// - `MemorySink`: keeps records for inspection
/// - `NoOpSink`: discards everything
pub trait Sink: Send + Sync {
    /// Emit one formatted message
    fn log_at_severity(&self, severity: Severity, message: &str, metadata: Option<&Metadata>);

    /// Emit a full record
    ///
    /// Defaults to [`Sink::log_at_severity`]; override to keep the extra fields.
    fn write_record(&self, record: &LogRecord) {
        self.log_at_severity(record.severity, &record.message, record.metadata.as_ref());
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
