use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{DiagnosticEntry, Message};

/// View updates emitted by a chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// Full transcript after a change.
    Transcript(Vec<Message>),
    /// Diagnostic entries appended since the previous event.
    Diagnostics(Vec<DiagnosticEntry>),
    /// Loading indicator shown (`true`) or hidden (`false`).
    Busy(bool),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
