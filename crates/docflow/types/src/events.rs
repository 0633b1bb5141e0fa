//! Event sink port
//!
//! Actions that announce domain events (document verified, published,
//! archived) write them to an [`EventSink`]. The engine itself never
//! emits; only workflow-specific actions do. [`NullSink`] drops
//! everything; [`RecordingSink`] captures events for tests and demos.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

// ── Port ─────────────────────────────────────────────────────────────

/// Capability to deliver a named domain event with a JSON payload
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: serde_json::Value);
}

// ── Null sink ────────────────────────────────────────────────────────

/// Sink that discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &str, _payload: serde_json::Value) {}
}

// ── Recording sink ───────────────────────────────────────────────────

/// An event captured by [`RecordingSink`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub event: String,
    pub payload: serde_json::Value,
}

/// Sink that keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of events emitted so far
    pub fn count(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &str, payload: serde_json::Value) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedEvent {
                event: event.to_string(),
                payload,
            });
    }
}
