use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A structured log record flowing through the processor chain.
///
/// This is the canonical representation of a record between the logging
/// front-end (which constructs it) and the handler layer (which consumes it).
/// Processors enrich a record by inserting context keys; they never mutate
/// `severity` or `message` and never remove existing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub channel: String,
    pub timestamp: DateTime<Utc>,

    // Structured fields attached by the caller and by processors
    #[serde(default)]
    pub context: HashMap<String, Value>,
}

impl LogRecord {
    /// Create a record on the default channel, stamped with the current time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            channel: "app".to_string(),
            timestamp: Utc::now(),
            context: HashMap::new(),
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Attach a caller-supplied context value.
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_has_empty_context() {
        let record = LogRecord::new(Severity::Info, "request served");

        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.message, "request served");
        assert_eq!(record.channel, "app");
        assert!(record.context.is_empty());
    }

    #[test]
    fn test_with_channel_and_context() {
        let record = LogRecord::new(Severity::Error, "connection refused")
            .with_channel("upstream")
            .with_context("attempt", json!(3));

        assert_eq!(record.channel, "upstream");
        assert_eq!(record.context.get("attempt"), Some(&json!(3)));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = LogRecord::new(Severity::Warning, "slow query")
            .with_context("duration_ms", json!(1500));

        let json = serde_json::to_string(&record).unwrap();
        let decoded: LogRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
    }
}
