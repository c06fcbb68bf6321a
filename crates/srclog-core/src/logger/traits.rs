//! Logging surface shared by loggers and context-scoped loggers

use std::error::Error as StdError;

use crate::level::Severity;
use crate::record::{LogMessage, Metadata};

/// Severity-named logging methods
///
/// Implementors provide [`Log::emit`]; everything else is derived from it.
/// None of these methods fail: disabled or unrecognised severities are
/// dropped without a trace.
pub trait Log {
    /// Gate, format and forward one message
    fn emit(&self, severity: Severity, message: &LogMessage, metadata: Option<&Metadata>);

    /// Log at a severity given by name
    ///
    /// `err` and `warn` are accepted as aliases. Unknown names are ignored.
    fn log(&self, severity: &str, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        if let Some(severity) = Severity::parse(severity) {
            self.emit(severity, &message.into(), metadata);
        }
    }

    /// Log at a known severity
    fn log_at(&self, severity: Severity, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.emit(severity, &message.into(), metadata);
    }

    /// Log an error value along with its cause chain
    fn log_error<E: StdError + ?Sized>(&self, severity: Severity, err: &E, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.emit(severity, &LogMessage::error(err), metadata);
    }

    fn debug(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Debug, message, metadata);
    }

    fn info(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Info, message, metadata);
    }

    fn notice(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Notice, message, metadata);
    }

    fn warn(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Warning, message, metadata);
    }

    fn warning(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Warning, message, metadata);
    }

    fn error(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Error, message, metadata);
    }

    fn err(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Error, message, metadata);
    }

    fn crit(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Crit, message, metadata);
    }

    fn alert(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Alert, message, metadata);
    }

    fn emerg(&self, message: impl Into<LogMessage>, metadata: Option<&Metadata>)
    where
        Self: Sized,
    {
        self.log_at(Severity::Emerg, message, metadata);
    }
}
