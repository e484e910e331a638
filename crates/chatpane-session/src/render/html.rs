//! HTML fragment rendering for the transcript and syslog panes.

use std::borrow::Cow;

use chatpane_common::{DiagnosticEntry, Message, Role};

use super::RenderSink;

/// One `<div class="LABEL">LABEL: content</div>` per message.
///
/// User text is escaped. Assistant and system content is passed through
/// as-is: notices carry their own markup, and server replies are trusted to
/// the same degree the server is.
pub fn transcript_html(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| {
            let label = msg.role().label();
            let content = match msg.role() {
                Role::User => Cow::Owned(escape_html(msg.content())),
                Role::System | Role::Assistant => Cow::Borrowed(msg.content()),
            };
            format!(r#"<div class="{label}">{label}: {content}</div>"#)
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One `<div>entry</div>` per diagnostic entry.
pub fn diagnostics_html(entries: &[DiagnosticEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("<div>{entry}</div>"))
        .collect()
}

/// The DOM-side targets an [`HtmlSink`] writes into.
pub trait FragmentTarget: Send + Sync {
    /// Replace the transcript container's contents.
    fn replace_transcript(&self, html: &str);

    /// Append to the syslog container.
    fn append_diagnostics(&self, html: &str);

    /// Toggle the loading spinner.
    fn set_loading_visible(&self, visible: bool);
}

/// Adapts a [`FragmentTarget`] into a [`RenderSink`].
pub struct HtmlSink<T> {
    target: T,
}

impl<T: FragmentTarget> HtmlSink<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: FragmentTarget> RenderSink for HtmlSink<T> {
    fn render_transcript(&self, messages: &[Message]) {
        self.target.replace_transcript(&transcript_html(messages));
    }

    fn render_diagnostics(&self, entries: &[DiagnosticEntry]) {
        if entries.is_empty() {
            return;
        }
        self.target.append_diagnostics(&diagnostics_html(entries));
    }

    fn set_busy(&self, busy: bool) {
        self.target.set_loading_visible(busy);
    }
}
