//! ChatTransport implementation for HttpTransport.

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{ChatReply, ChatRequest, ChatTransport, TransportError};

use super::client::{parse_reply, HttpTransport};

impl HttpTransport {
    async fn post_json(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let url = self.exchange_url();
        debug!(url = %url, model = %request.model, "chat request");

        let response = self
            .http
            .post(&url)
            .json(&request.to_json())
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        // Status gates decoding: an error page is never parsed as a reply.
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let json: Value =
            serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))?;

        parse_reply(&json)
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        request: ChatRequest,
        cancel: CancellationToken,
    ) -> Result<ChatReply, TransportError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            result = self.post_json(&request) => result,
        }
    }

    async fn post_knowledge(&self, text: &str) -> Result<Value, TransportError> {
        let url = self.knowledge_url();
        debug!(url = %url, chars = text.len(), "knowledge request");

        let response = self
            .http
            .post(&url)
            .form(&[("knowledge", text)])
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
