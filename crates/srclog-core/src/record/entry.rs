//! Per-call log record

use super::message::LogMessage;
use super::Metadata;
use crate::level::Severity;

/// One accepted log call, ready for a sink
///
/// Built per call and handed to the sink by reference; nothing keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub severity: Severity,
    /// Fully formatted line: `[request id - ]label - body`
    pub message: String,
    pub metadata: Option<Metadata>,
    pub source_label: String,
    pub request_id: Option<String>,
}

impl LogRecord {
    pub fn new(
        severity: Severity,
        message: &LogMessage,
        metadata: Option<&Metadata>,
        source_label: &str,
        request_id: Option<String>,
    ) -> Self {
        Self {
            severity,
            message: format_message(source_label, request_id.as_deref(), message),
            metadata: metadata.cloned(),
            source_label: source_label.to_string(),
            request_id,
        }
    }
}

/// Format a message body with its source label and optional request id
pub fn format_message(source_label: &str, request_id: Option<&str>, message: &LogMessage) -> String {
    match request_id {
        Some(id) => format!("{} - {} - {}", id, source_label, message.render()),
        None => format!("{} - {}", source_label, message.render()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ErrorDetails;
    use serde_json::json;

    #[test]
    fn test_format_text() {
        let message = LogMessage::from("Basic test");
        assert_eq!(format_message("src/main.rs", None, &message), "src/main.rs - Basic test");
    }

    #[test]
    fn test_format_error() {
        let message = LogMessage::from(ErrorDetails::new("AppError", "boom", "trace line"));
        assert_eq!(
            format_message("lib/x.rs", None, &message),
            "lib/x.rs - AppError - boom - \ntrace line"
        );
    }

    #[test]
    fn test_format_with_request_id() {
        let message = LogMessage::from("hello");
        let formatted = format_message("lib/x.rs", Some("abc-123"), &message);
        assert!(formatted.starts_with("abc-123"));
        assert_eq!(formatted, "abc-123 - lib/x.rs - hello");
    }

    #[test]
    fn test_record_copies_metadata() {
        let metadata = match json!({ "prop1": "p1" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let record = LogRecord::new(Severity::Info, &"hi".into(), Some(&metadata), "label", None);
        assert_eq!(record.metadata.as_ref(), Some(&metadata));
        assert_eq!(record.message, "label - hi");
        assert_eq!(record.source_label, "label");
    }
}
