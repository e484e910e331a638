use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Label shown in front of the message in the transcript pane.
    pub fn label(&self) -> &'static str {
        match self {
            Role::System => "SYSTEM",
            Role::User => "USER",
            Role::Assistant => "SSM",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        f.write_str(name)
    }
}

/// A single conversational turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// One line of the diagnostic (syslog) pane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticEntry(String);

impl DiagnosticEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Flatten a `syslog` payload into entries.
    ///
    /// Arrays yield one entry per element (strings verbatim, anything else
    /// as compact JSON). A bare string is one entry; `null` yields nothing;
    /// any other value is kept as its JSON text.
    pub fn from_payload(value: &serde_json::Value) -> Vec<Self> {
        match value {
            serde_json::Value::Null => Vec::new(),
            serde_json::Value::Array(items) => items.iter().map(Self::from_value).collect(),
            other => vec![Self::from_value(other)],
        }
    }

    fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DiagnosticEntry {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DiagnosticEntry {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(role, Role::System);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"tool\"");
        assert!(result.is_err());
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::System.label(), "SYSTEM");
        assert_eq!(Role::User.label(), "USER");
        assert_eq!(Role::Assistant.label(), "SSM");
    }

    #[test]
    fn message_wire_shape() {
        let msg = Message::user("Hello there!");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "Hello there!"}));
    }

    #[test]
    fn syslog_array_is_split() {
        let entries = DiagnosticEntry::from_payload(&json!(["MODEL: x", "MESSAGE: hi"]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_str(), "MODEL: x");
        assert_eq!(entries[1].as_str(), "MESSAGE: hi");
    }

    #[test]
    fn syslog_string_is_one_entry() {
        let entries = DiagnosticEntry::from_payload(&json!("note A"));
        assert_eq!(entries, vec![DiagnosticEntry::new("note A")]);
    }

    #[test]
    fn syslog_object_is_stringified() {
        let entries = DiagnosticEntry::from_payload(&json!({"message": "ok"}));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_str(), r#"{"message":"ok"}"#);
    }

    #[test]
    fn syslog_null_is_empty() {
        assert!(DiagnosticEntry::from_payload(&serde_json::Value::Null).is_empty());
    }
}
