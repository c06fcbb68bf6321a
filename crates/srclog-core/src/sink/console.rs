//! Console sink implementation

use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use super::traits::Sink;
use crate::level::Severity;
use crate::record::Metadata;

/// Render a sink line: `{timestamp} - {severity}: {message} {metadata}`
///
/// The timestamp is ISO 8601 UTC with milliseconds. Metadata is appended as
/// compact JSON when present and non-empty.
pub fn format_line(severity: Severity, message: &str, metadata: Option<&Metadata>) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    format_line_at(&timestamp, severity, message, metadata)
}

pub(crate) fn format_line_at(
    timestamp: &str,
    severity: Severity,
    message: &str,
    metadata: Option<&Metadata>,
) -> String {
    match metadata.filter(|m| !m.is_empty()) {
        Some(meta) => format!(
            "{} - {}: {} {}",
            timestamp,
            severity,
            message,
            Value::Object(meta.clone())
        ),
        None => format!("{} - {}: {}", timestamp, severity, message),
    }
}

fn ansi_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => "\x1b[34m",
        Severity::Info => "\x1b[32m",
        Severity::Notice => "\x1b[36m",
        Severity::Warning => "\x1b[33m",
        Severity::Error => "\x1b[31m",
        Severity::Crit | Severity::Alert | Severity::Emerg => "\x1b[1;31m",
    }
}

/// A sink that writes lines to the console
///
/// `warning` and more urgent go to stderr, the rest to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    colorize: bool,
}

impl ConsoleSink {
    /// Create a console sink without colors
    pub fn new() -> Self {
        Self { colorize: false }
    }

    /// Create a console sink that colors the severity with ANSI escapes
    pub fn colored() -> Self {
        Self { colorize: true }
    }

    fn render(&self, severity: Severity, message: &str, metadata: Option<&Metadata>) -> String {
        let line = format_line(severity, message, metadata);
        if self.colorize {
            format!("{}{}\x1b[0m", ansi_color(severity), line)
        } else {
            line
        }
    }
}

impl Sink for ConsoleSink {
    fn log_at_severity(&self, severity: Severity, message: &str, metadata: Option<&Metadata>) {
        let line = self.render(severity, message, metadata);
        if severity >= Severity::Warning {
            let _ = writeln!(io::stderr().lock(), "{}", line);
        } else {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_line() {
        let line = format_line_at("2024-01-01T00:00:00.000Z", Severity::Notice, "src/a.rs - hi", None);
        assert_eq!(line, "2024-01-01T00:00:00.000Z - notice: src/a.rs - hi");
    }

    #[test]
    fn test_format_line_metadata() {
        let meta = match json!({ "prop2": "p2", "prop1": "p1" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let line = format_line_at("T", Severity::Info, "m", Some(&meta));
        assert_eq!(line, r#"T - info: m {"prop1":"p1","prop2":"p2"}"#);

        let empty = Metadata::new();
        assert_eq!(format_line_at("T", Severity::Info, "m", Some(&empty)), "T - info: m");
    }

    #[test]
    fn test_timestamp_shape() {
        let line = format_line(Severity::Debug, "x", None);
        let timestamp = line.split(" - ").next().unwrap();
        assert!(timestamp.ends_with('Z'));
        assert_eq!(timestamp.len(), "2024-01-01T00:00:00.000Z".len());
    }

    #[test]
    fn test_colored_render() {
        let sink = ConsoleSink::colored();
        let rendered = sink.render(Severity::Error, "boom", None);
        assert!(rendered.starts_with("\x1b[31m"));
        assert!(rendered.ends_with("\x1b[0m"));
        assert!(!ConsoleSink::new().render(Severity::Error, "boom", None).contains('\x1b'));
    }

    #[test]
    fn test_console_sink_logs() {
        // This test just verifies the sink doesn't panic
        let sink = ConsoleSink::new();
        for severity in Severity::ALL {
            sink.log_at_severity(severity, "message", None);
        }
    }
}
