//! Render sink that publishes view updates on an [`EventBus`].

use std::sync::Arc;

use chatpane_common::{DiagnosticEntry, EventBus, Message, SessionEvent};
use tracing::trace;

pub struct EventSink {
    bus: Arc<EventBus>,
}

impl EventSink {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }
}

impl super::RenderSink for EventSink {
    fn render_transcript(&self, messages: &[Message]) {
        let delivered = self.bus.publish(SessionEvent::Transcript(messages.to_vec()));
        trace!(delivered, messages = messages.len(), "transcript published");
    }

    fn render_diagnostics(&self, entries: &[DiagnosticEntry]) {
        if entries.is_empty() {
            return;
        }
        self.bus.publish(SessionEvent::Diagnostics(entries.to_vec()));
    }

    fn set_busy(&self, busy: bool) {
        self.bus.publish(SessionEvent::Busy(busy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSink;

    #[tokio::test]
    async fn forwards_updates_in_order() {
        let bus = Arc::new(EventBus::new(16));
        let mut rx = bus.subscribe();
        let sink = EventSink::new(bus.clone());

        sink.set_busy(true);
        sink.render_transcript(&[Message::user("ping")]);
        sink.render_diagnostics(&[]);
        sink.render_diagnostics(&[DiagnosticEntry::new("note A")]);
        sink.set_busy(false);

        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::Busy(true)));
        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::Transcript(ref m) if m.len() == 1));
        assert!(
            matches!(rx.recv().await.unwrap(), SessionEvent::Diagnostics(ref e) if e[0].as_str() == "note A")
        );
        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::Busy(false)));
    }
}
