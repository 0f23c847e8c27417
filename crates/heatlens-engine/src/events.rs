//! Engine event queue.
//!
//! The engine renders no notifications of its own; it queues at most a
//! ready/failed pair per surface lifecycle for the host shell to translate
//! into toasts. Drained FIFO.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum EngineEventKind {
    SurfaceReady,
    SurfaceInitFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EngineEventKind,
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<EngineEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, kind: EngineEventKind) {
        self.events.push(EngineEvent {
            at: Utc::now(),
            kind,
        });
    }

    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}
