use serde::{Deserialize, Serialize};

/// Priming message seeded as the first (system) message of a session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersonaConfig {
    /// Empty means the conversation starts with no system message.
    pub system_prompt: String,
}

impl PersonaConfig {
    pub fn prompt(&self) -> Option<&str> {
        let trimmed = self.system_prompt.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
