//! Bridge into the `tracing` ecosystem
//!
//! Lets an application that already runs a `tracing` subscriber receive
//! srclog output through it. Syslog severities fold onto tracing's five levels.

use serde_json::Value;

use super::traits::Sink;
use crate::level::Severity;
use crate::record::Metadata;

/// Event target used for every emitted event
pub const TRACING_TARGET: &str = "srclog";

/// Tracing level a severity is emitted at
pub fn tracing_level(severity: Severity) -> tracing::Level {
    match severity {
        Severity::Debug => tracing::Level::DEBUG,
        Severity::Info | Severity::Notice => tracing::Level::INFO,
        Severity::Warning => tracing::Level::WARN,
        Severity::Error | Severity::Crit | Severity::Alert | Severity::Emerg => tracing::Level::ERROR,
    }
}

/// A sink that emits `tracing` events
///
/// The original severity is kept in the `severity` field so `notice` and
/// `crit` stay distinguishable after folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn log_at_severity(&self, severity: Severity, message: &str, metadata: Option<&Metadata>) {
        let meta = metadata
            .filter(|m| !m.is_empty())
            .map(|m| Value::Object(m.clone()).to_string())
            .unwrap_or_default();
        let severity_name = severity.as_str();

        match severity {
            Severity::Debug => {
                tracing::debug!(target: TRACING_TARGET, severity = severity_name, metadata = %meta, "{}", message)
            }
            Severity::Info | Severity::Notice => {
                tracing::info!(target: TRACING_TARGET, severity = severity_name, metadata = %meta, "{}", message)
            }
            Severity::Warning => {
                tracing::warn!(target: TRACING_TARGET, severity = severity_name, metadata = %meta, "{}", message)
            }
            Severity::Error | Severity::Crit | Severity::Alert | Severity::Emerg => {
                tracing::error!(target: TRACING_TARGET, severity = severity_name, metadata = %meta, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::span::{Attributes, Id, Record};

    #[derive(Clone, Default)]
    struct Collector {
        events: Arc<Mutex<Vec<(tracing::Level, String)>>>,
    }

    impl tracing::Subscriber for Collector {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let metadata = event.metadata();
            self.events
                .lock()
                .unwrap()
                .push((*metadata.level(), metadata.target().to_string()));
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    #[test]
    fn test_level_folding() {
        assert_eq!(tracing_level(Severity::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing_level(Severity::Notice), tracing::Level::INFO);
        assert_eq!(tracing_level(Severity::Warning), tracing::Level::WARN);
        assert_eq!(tracing_level(Severity::Emerg), tracing::Level::ERROR);
    }

    #[test]
    fn test_emits_events() {
        let collector = Collector::default();
        let events = collector.events.clone();

        tracing::subscriber::with_default(collector, || {
            let sink = TracingSink::new();
            sink.log_at_severity(Severity::Notice, "src/a.rs - hello", None);
            sink.log_at_severity(Severity::Crit, "src/a.rs - down", None);
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], (tracing::Level::INFO, TRACING_TARGET.to_string()));
        assert_eq!(events[1].0, tracing::Level::ERROR);
    }
}
