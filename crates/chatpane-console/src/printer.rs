//! Prints session events to the terminal.
//!
//! The transcript only ever grows, so each `Transcript` event prints just
//! the messages not yet shown.

use std::io::{self, Write};

use chatpane_common::{DiagnosticEntry, Message, SessionEvent};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

pub struct Printer<W: Write> {
    out: W,
    shown: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out, shown: 0 }
    }

    /// Print one event. Returns `false` once the session has shut down.
    pub fn handle(&mut self, event: &SessionEvent) -> io::Result<bool> {
        match event {
            SessionEvent::Transcript(messages) => self.print_new(messages)?,
            SessionEvent::Diagnostics(entries) => self.print_diagnostics(entries)?,
            SessionEvent::Busy(true) => writeln!(self.out, "  ... waiting for reply")?,
            SessionEvent::Busy(false) | SessionEvent::Unknown => {}
            SessionEvent::Shutdown => return Ok(false),
        }
        self.out.flush()?;
        Ok(true)
    }

    fn print_new(&mut self, messages: &[Message]) -> io::Result<()> {
        for message in messages.iter().skip(self.shown) {
            writeln!(
                self.out,
                "{}: {}",
                message.role().label(),
                strip_tags(message.content())
            )?;
        }
        self.shown = self.shown.max(messages.len());
        Ok(())
    }

    fn print_diagnostics(&mut self, entries: &[DiagnosticEntry]) -> io::Result<()> {
        for entry in entries {
            writeln!(self.out, "  [syslog] {}", strip_tags(entry.as_str()))?;
        }
        Ok(())
    }
}

/// Drop inline markup such as the red span around error notices.
///
/// Only a `<` closed by a `>` before any other `<` counts as a tag; a lone
/// `<` in ordinary text is kept.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(|c: char| c == '<' || c == '>') {
            Some(end) if after[end..].starts_with('>') => rest = &after[end + 1..],
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Drain the event stream into stdout until shutdown.
pub async fn run(mut rx: broadcast::Receiver<SessionEvent>) {
    let mut printer = Printer::new(io::stdout());
    loop {
        let event = match rx.recv().await {
            Ok(event) => event,
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "printer fell behind");
                continue;
            }
            Err(RecvError::Closed) => break,
        };
        match printer.handle(&event) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!(error = %e, "stdout write failed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.out).unwrap()
    }

    #[test]
    fn prints_only_new_messages() {
        let mut printer = Printer::new(Vec::new());
        let first = vec![
            Message::system("persona text"),
            Message::user("Hello there!"),
        ];
        let mut second = first.clone();
        second.push(Message::assistant("Hello!"));

        printer.handle(&SessionEvent::Transcript(first)).unwrap();
        printer.handle(&SessionEvent::Transcript(second)).unwrap();

        assert_eq!(
            output(printer),
            "SYSTEM: persona text\nUSER: Hello there!\nSSM: Hello!\n"
        );
    }

    #[test]
    fn notices_are_printed_without_markup() {
        let mut printer = Printer::new(Vec::new());
        let notice = r#"<span style="color:red;">HTTP error status: 500</span>"#;
        printer
            .handle(&SessionEvent::Transcript(vec![Message::system(notice)]))
            .unwrap();
        printer
            .handle(&SessionEvent::Diagnostics(vec![DiagnosticEntry::new(notice)]))
            .unwrap();

        assert_eq!(
            output(printer),
            "SYSTEM: HTTP error status: 500\n  [syslog] HTTP error status: 500\n"
        );
    }

    #[test]
    fn shutdown_stops_printing() {
        let mut printer = Printer::new(Vec::new());
        assert!(printer.handle(&SessionEvent::Busy(true)).unwrap());
        assert!(!printer.handle(&SessionEvent::Shutdown).unwrap());
    }

    #[test]
    fn strip_tags_keeps_plain_comparisons() {
        assert_eq!(strip_tags("a > b"), "a > b");
        assert_eq!(strip_tags("a < b"), "a < b");
        assert_eq!(strip_tags("if x < 3 then y"), "if x < 3 then y");
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_tags("x < y <i>z</i>"), "x < y z");
        assert_eq!(strip_tags("trailing <"), "trailing <");
    }

    #[test]
    fn user_comparison_survives_printing() {
        let mut printer = Printer::new(Vec::new());
        printer
            .handle(&SessionEvent::Transcript(vec![Message::user("is a < b?")]))
            .unwrap();
        assert_eq!(output(printer), "USER: is a < b?\n");
    }
}
