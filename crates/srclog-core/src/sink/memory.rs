//! In-memory sink

use parking_lot::RwLock;

use super::traits::Sink;
use crate::level::Severity;
use crate::record::{LogRecord, Metadata};

/// In-memory sink for testing and inspection
///
/// Keeps every record it receives until cleared.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RwLock<Vec<LogRecord>>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of everything received so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    /// Formatted messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.records.read().iter().map(|r| r.message.clone()).collect()
    }

    /// Most recent record
    pub fn last(&self) -> Option<LogRecord> {
        self.records.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured records
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Sink for MemorySink {
    fn log_at_severity(&self, severity: Severity, message: &str, metadata: Option<&Metadata>) {
        self.records.write().push(LogRecord {
            severity,
            message: message.to_string(),
            metadata: metadata.cloned(),
            source_label: String::new(),
            request_id: None,
        });
    }

    fn write_record(&self, record: &LogRecord) {
        self.records.write().push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LogMessage;

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.log_at_severity(Severity::Info, "plain", None);
        let record = LogRecord::new(
            Severity::Error,
            &LogMessage::from("full"),
            None,
            "lib/a.rs",
            Some("req-1".to_string()),
        );
        sink.write_record(&record);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["plain".to_string(), "req-1 - lib/a.rs - full".to_string()]);
        assert_eq!(sink.last(), Some(record));

        sink.clear();
        assert!(sink.is_empty());
    }
}
