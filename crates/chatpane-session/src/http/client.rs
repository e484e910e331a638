//! HttpTransport struct, URL joining, and reply parsing.

use std::time::Duration;

use chatpane_common::DiagnosticEntry;
use chatpane_config::EndpointConfig;
use serde_json::Value;

use crate::{ChatReply, TransportError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed `ChatTransport`.
///
/// No overall request timeout is set here; the controller owns the deadline
/// and cancels the request when it elapses.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub(crate) base_url: String,
    pub(crate) exchange_path: String,
    pub(crate) knowledge_path: String,
    pub(crate) http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        exchange_path: impl Into<String>,
        knowledge_path: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            exchange_path: exchange_path.into(),
            knowledge_path: knowledge_path.into(),
            http,
        })
    }

    /// Build a transport for the endpoint's configured payload mode.
    pub fn from_config(endpoint: &EndpointConfig) -> Result<Self, TransportError> {
        Self::new(
            endpoint.base_url.clone(),
            endpoint.exchange_path(),
            endpoint.knowledge_path.clone(),
        )
    }

    pub fn exchange_url(&self) -> String {
        self.url(&self.exchange_path)
    }

    pub fn knowledge_url(&self) -> String {
        self.url(&self.knowledge_path)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Pull the reply text and syslog out of a decoded response body.
///
/// `choices[0].message` is normally `{"content": ...}` but some routes send
/// the text directly as a string.
pub(crate) fn parse_reply(json: &Value) -> Result<ChatReply, TransportError> {
    let choice = json["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .ok_or_else(|| TransportError::Decode("response has no choices".into()))?;

    let content = match &choice["message"] {
        Value::String(text) => text.clone(),
        Value::Object(message) => message
            .get("content")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| TransportError::Decode("message has no content".into()))?,
        _ => return Err(TransportError::Decode("choice has no message".into())),
    };

    let diagnostics = choice
        .get("syslog")
        .map(DiagnosticEntry::from_payload)
        .unwrap_or_default();

    Ok(ChatReply {
        content,
        diagnostics,
    })
}
