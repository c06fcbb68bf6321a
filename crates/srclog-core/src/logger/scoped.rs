//! Logger bound to a request context

use std::fmt;

use super::handle::SourceLogger;
use super::traits::Log;
use crate::level::Severity;
use crate::record::{ContextProvider, LogMessage, Metadata};

/// A [`SourceLogger`] borrowed together with a request context
///
/// Every call picks up the context's request id, which takes precedence
/// over a `requestId` in the call metadata.
pub struct ScopedLogger<'a> {
    logger: &'a SourceLogger,
    context: &'a dyn ContextProvider,
}

impl<'a> ScopedLogger<'a> {
    pub fn new(logger: &'a SourceLogger, context: &'a dyn ContextProvider) -> Self {
        Self { logger, context }
    }

    pub fn logger(&self) -> &SourceLogger {
        self.logger
    }

    pub fn request_id(&self) -> Option<String> {
        self.context.current_request_id()
    }
}

impl Log for ScopedLogger<'_> {
    fn emit(&self, severity: Severity, message: &LogMessage, metadata: Option<&Metadata>) {
        self.logger
            .emit_with_context(severity, message, metadata, Some(self.context));
    }
}

impl fmt::Debug for ScopedLogger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedLogger")
            .field("logger", self.logger)
            .field("request_id", &self.request_id())
            .finish()
    }
}
