//! Fan-out sink

use std::sync::Arc;

use parking_lot::RwLock;

use super::traits::Sink;
use crate::level::Severity;
use crate::record::{LogRecord, Metadata};

/// A sink that forwards every record to several sinks in order
///
/// Sinks can be added while the fan-out is shared, so loggers created
/// earlier pick up transports registered later.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use srclog_core::sink::{ConsoleSink, FanoutSink, MemorySink, Sink};
///
/// let audit = Arc::new(MemorySink::new());
/// let sink = FanoutSink::new(vec![Arc::new(ConsoleSink::new()), audit.clone()]);
/// sink.log_at_severity(srclog_core::Severity::Info, "to both", None);
/// assert_eq!(audit.len(), 1);
/// ```
#[derive(Default)]
pub struct FanoutSink {
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            sinks: RwLock::new(sinks),
        }
    }

    /// Add another sink at the end
    pub fn push(&self, sink: Arc<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Builder form of [`FanoutSink::push`]
    pub fn with(self, sink: Arc<dyn Sink>) -> Self {
        self.push(sink);
        self
    }

    /// Snapshot of the current sinks
    pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
        self.sinks.read().clone()
    }

    pub fn len(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.len())
            .finish()
    }
}

impl Sink for FanoutSink {
    fn log_at_severity(&self, severity: Severity, message: &str, metadata: Option<&Metadata>) {
        for sink in self.sinks.read().iter() {
            sink.log_at_severity(severity, message, metadata);
        }
    }

    fn write_record(&self, record: &LogRecord) {
        for sink in self.sinks.read().iter() {
            sink.write_record(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LogMessage;
    use crate::sink::MemorySink;

    #[test]
    fn test_fanout_reaches_every_sink() {
        let a = Arc::new(MemorySink::new());
        let b = Arc::new(MemorySink::new());
        let sink = FanoutSink::new(vec![a.clone()]).with(b.clone());
        assert_eq!(sink.len(), 2);

        let record = LogRecord::new(Severity::Warning, &LogMessage::from("w"), None, "x", None);
        sink.write_record(&record);
        sink.log_at_severity(Severity::Info, "i", None);

        assert_eq!(a.records(), b.records());
        assert_eq!(a.len(), 2);
        // write_record keeps the full record on each child
        assert_eq!(a.records()[0].source_label, "x");
    }

    #[test]
    fn test_push_through_shared_handle() {
        let shared = Arc::new(FanoutSink::default());
        assert!(shared.is_empty());

        let late = Arc::new(MemorySink::new());
        shared.push(late.clone());
        shared.log_at_severity(Severity::Notice, "after push", None);

        assert_eq!(shared.sinks().len(), 1);
        assert_eq!(late.messages(), vec!["after push".to_string()]);
    }

    #[test]
    fn test_empty_fanout() {
        FanoutSink::default().log_at_severity(Severity::Emerg, "nowhere", None);
    }
}
