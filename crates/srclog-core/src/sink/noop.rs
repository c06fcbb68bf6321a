//! No-op sink implementation

use super::traits::Sink;
use crate::level::Severity;
use crate::record::Metadata;

/// A sink that does nothing
///
/// Useful for testing or when output is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn log_at_severity(&self, _severity: Severity, _message: &str, _metadata: Option<&Metadata>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();

        // These should all do nothing without panicking
        for severity in Severity::ALL {
            sink.log_at_severity(severity, "message", None);
        }
    }
}
