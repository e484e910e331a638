//! Append-only conversation history and diagnostic log.
//!
//! Neither type offers removal or mutation of existing entries: the
//! transcript of a session can always be replayed from the start.

use chatpane_common::{DiagnosticEntry, Message};

/// Ordered log of the messages exchanged in one session.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation primed with a single system (persona) message.
    pub fn with_persona(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(prompt)],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Copy of the history as of this call.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Secondary stream of informational entries about how replies were produced.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<DiagnosticEntry>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: DiagnosticEntry) {
        self.entries.push(entry);
    }

    /// Append several entries, returning the slice that was just added.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = DiagnosticEntry>) -> &[DiagnosticEntry] {
        let start = self.entries.len();
        self.entries.extend(entries);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_common::Role;

    #[test]
    fn starts_empty() {
        let store = ConversationStore::new();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn persona_is_first_message() {
        let store = ConversationStore::with_persona("persona text");
        assert_eq!(store.len(), 1);
        assert_eq!(store.messages()[0].role(), Role::System);
        assert_eq!(store.messages()[0].content(), "persona text");
    }

    #[test]
    fn append_preserves_order_and_prior_entries() {
        let mut store = ConversationStore::with_persona("persona text");
        let mut previous = store.snapshot();

        for msg in [
            Message::user("Hello there!"),
            Message::assistant("Hello!"),
            Message::system("notice"),
        ] {
            store.append(msg);
            let current = store.snapshot();
            assert_eq!(current.len(), previous.len() + 1);
            assert_eq!(&current[..previous.len()], previous.as_slice());
            previous = current;
        }

        let roles: Vec<Role> = store.messages().iter().map(Message::role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::System]
        );
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = ConversationStore::new();
        store.append(Message::user("one"));
        let snap = store.snapshot();
        store.append(Message::user("two"));
        assert_eq!(snap.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn log_extend_returns_new_entries() {
        let mut log = DiagnosticLog::new();
        log.append(DiagnosticEntry::new("MODEL: gpt-3.5-turbo"));

        let added = log.extend(vec![DiagnosticEntry::new("a"), DiagnosticEntry::new("b")]);
        assert_eq!(added.len(), 2);
        assert_eq!(added[0].as_str(), "a");
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn log_extend_with_nothing_adds_nothing() {
        let mut log = DiagnosticLog::new();
        assert!(log.extend(Vec::new()).is_empty());
        assert!(log.is_empty());
    }
}
