//! Analytics event recording.
//!
//! Transport is the host app's concern; this component only hands events
//! to a sink and never waits on the result.

use serde::{Deserialize, Serialize};

/// A single analytics event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(action: &str, category: &str, label: &str) -> Self {
        Self {
            action: action.to_string(),
            category: category.to_string(),
            label: label.to_string(),
        }
    }
}

/// Sink for analytics events. `record` must not block the UI thread;
/// delivery failures stay inside the sink.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that logs events as JSON lines through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: AnalyticsEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => tracing::info!(target: "analytics", "{json}"),
            Err(e) => tracing::warn!("failed to serialize analytics event: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Sink that captures events for assertions.
    pub struct CaptureSink(pub Mutex<Vec<AnalyticsEvent>>);

    impl AnalyticsSink for CaptureSink {
        fn record(&self, event: AnalyticsEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_event_json_shape() {
        let event = AnalyticsEvent::new("BABT", "Show", "0xabc");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"action":"BABT","category":"Show","label":"0xabc"}"#
        );
    }

    #[test]
    fn test_capture_sink_records() {
        let sink = CaptureSink(Mutex::new(Vec::new()));
        sink.record(AnalyticsEvent::new("BABT", "Show", "0xabc"));
        sink.record(AnalyticsEvent::new("BABT", "Show", "0xdef"));
        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].label, "0xabc");
    }
}
