//! Presentation boundary of a session.
//!
//! The controller talks to the view layer only through [`RenderSink`].
//! Sinks are invoked while session state is locked and must not call back
//! into the controller.

mod events;
mod html;
mod input;

pub use events::EventSink;
pub use html::{diagnostics_html, transcript_html, FragmentTarget, HtmlSink};
pub use input::{InputSurface, TextInput};

use chatpane_common::{DiagnosticEntry, Message};

pub trait RenderSink: Send + Sync {
    /// Replace the transcript view with the full conversation.
    fn render_transcript(&self, messages: &[Message]);

    /// Add entries appended to the diagnostic log since the last call.
    fn render_diagnostics(&self, entries: &[DiagnosticEntry]);

    /// Show or hide the loading indicator.
    fn set_busy(&self, busy: bool);
}

/// Discards everything. For headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render_transcript(&self, _messages: &[Message]) {}

    fn render_diagnostics(&self, _entries: &[DiagnosticEntry]) {}

    fn set_busy(&self, _busy: bool) {}
}
