//! Conversation session engine for chatpane.
//!
//! Provides the pieces behind a chat widget:
//! - An append-only conversation store and diagnostic log
//! - A session controller that runs one request cycle per submission
//!   (issue, race against a deadline, classify, apply)
//! - An HTTP transport for the `/chat` and `/discuss` endpoints
//! - Render sinks that turn session state into HTML fragments or events

pub mod controller;
pub mod http;
pub mod render;
pub mod selector;
pub mod store;

use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

pub use chatpane_common::{DiagnosticEntry, ExchangeError, Message, Role};
pub use chatpane_config::PayloadMode;
pub use controller::{ControllerConfig, ControllerPhase, ExchangeHandle, SessionController, Settlement};
pub use http::HttpTransport;
pub use render::{EventSink, FragmentTarget, HtmlSink, InputSurface, NullSink, RenderSink, TextInput};
pub use selector::{FixedModel, ModelChoice, ModelSelector};
pub use store::{ConversationStore, DiagnosticLog};

/// The remote side of a chat exchange.
///
/// Implementations should watch `cancel` and give up early once it fires;
/// the controller discards anything they return after that point.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(
        &self,
        request: ChatRequest,
        cancel: CancellationToken,
    ) -> Result<ChatReply, TransportError>;

    /// Post free-form knowledge text. The reply is opaque JSON destined for
    /// the diagnostic log.
    async fn post_knowledge(&self, text: &str) -> Result<serde_json::Value, TransportError> {
        let _ = text;
        Err(TransportError::Unsupported("knowledge submission".into()))
    }
}

/// What a single submission sends to the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub model: String,
    pub payload: ChatPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPayload {
    /// Whole conversation, serialized as `messages`.
    Conversation(Vec<Message>),
    /// Only the latest user text, serialized as `message`.
    LatestMessage(String),
}

#[derive(Serialize)]
struct ConversationBody<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Serialize)]
struct LatestMessageBody<'a> {
    model: &'a str,
    message: &'a str,
}

impl ChatRequest {
    /// JSON body posted to the endpoint.
    pub fn to_json(&self) -> serde_json::Value {
        let body = match &self.payload {
            ChatPayload::Conversation(messages) => serde_json::to_value(ConversationBody {
                model: &self.model,
                messages,
            }),
            ChatPayload::LatestMessage(message) => serde_json::to_value(LatestMessageBody {
                model: &self.model,
                message,
            }),
        };
        body.unwrap_or(serde_json::Value::Null)
    }
}

/// Decoded successful reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    pub diagnostics: Vec<DiagnosticEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Cancelled")]
    Cancelled,
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl TransportError {
    /// Map a transport failure onto the user-facing taxonomy.
    pub fn classify(&self) -> ExchangeError {
        match self {
            TransportError::Status(status) => ExchangeError::RemoteError { status: *status },
            TransportError::Network(detail) => ExchangeError::TransportFailure(detail.clone()),
            TransportError::Decode(detail) => ExchangeError::DecodeFailure(detail.clone()),
            TransportError::Cancelled => ExchangeError::Timeout,
            TransportError::Unsupported(what) => {
                ExchangeError::TransportFailure(format!("{what} is not supported"))
            }
        }
    }
}
