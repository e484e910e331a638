//! Remote endpoint configuration.

use serde::{Deserialize, Serialize};

/// Which payload the widget sends on each submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PayloadMode {
    /// Send the whole conversation (`{model, messages}`) to the chat path.
    #[default]
    Conversation,
    /// Send only the latest user text (`{model, message}`) to the discuss path.
    LatestMessage,
}

/// Where and how the widget talks to the model server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub mode: PayloadMode,
    pub chat_path: String,
    pub discuss_path: String,
    pub knowledge_path: String,
    /// Response deadline in milliseconds (valid range: 500-120000).
    pub timeout_ms: u32,
}

impl EndpointConfig {
    /// Path used for conversational exchanges in the configured mode.
    pub fn exchange_path(&self) -> &str {
        match self.mode {
            PayloadMode::Conversation => &self.chat_path,
            PayloadMode::LatestMessage => &self.discuss_path,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            mode: PayloadMode::Conversation,
            chat_path: "/chat".into(),
            discuss_path: "/discuss".into(),
            knowledge_path: "/knowledge".into(),
            timeout_ms: 10_000,
        }
    }
}
