//! Submission and the per-request lifecycle:
//! issue, race against the deadline, classify, apply.

use std::sync::Arc;

use chatpane_common::{new_correlation_id, DiagnosticEntry, ExchangeError, Message};
use chatpane_config::PayloadMode;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::render::InputSurface;
use crate::{ChatPayload, ChatReply, ChatRequest, ChatTransport};

use super::manager::{SessionController, Shared};
use super::types::{ControllerPhase, ExchangeHandle, RequestContext, Settlement};

impl SessionController {
    /// Start an exchange for `text`.
    ///
    /// Blank text is rejected with `ExchangeError::EmptyInput` and changes
    /// nothing. Otherwise the user message is appended, the sink is told the
    /// session is busy, and the request runs on a spawned task. A request
    /// still pending from an earlier call is cancelled and will apply nothing.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, text: impl Into<String>) -> Result<ExchangeHandle, ExchangeError> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!(session = %self.id, "ignoring blank submission");
            return Err(ExchangeError::EmptyInput);
        }

        // Read once; later selector changes do not affect this request.
        let model = self.selector.selected_model();

        let (ctx, request) = {
            let mut state = self.shared.lock();

            if let Some(previous) = state.current.take() {
                debug!(request_id = %previous.id, "superseding pending request");
                previous.cancel.cancel();
            }

            state.store.append(Message::user(text.clone()));
            let payload = match self.config.mode {
                PayloadMode::Conversation => ChatPayload::Conversation(state.store.snapshot()),
                PayloadMode::LatestMessage => ChatPayload::LatestMessage(text),
            };

            let id = state.next_id;
            state.next_id = id.next();
            let ctx = RequestContext {
                id,
                correlation: new_correlation_id(),
                cancel: CancellationToken::new(),
                timeout: self.config.timeout,
            };
            state.current = Some(ctx.clone());
            state.transition(ControllerPhase::Sending);

            self.shared.sink.render_transcript(state.store.messages());
            self.shared.sink.set_busy(true);

            (ctx, ChatRequest { model, payload })
        };

        info!(
            session = %self.id,
            request_id = %ctx.id,
            model = %request.model,
            timeout_ms = ctx.timeout.as_millis() as u64,
            "submitting message"
        );

        let id = ctx.id;
        let task = tokio::spawn(run_exchange(
            self.shared.clone(),
            self.transport.clone(),
            request,
            ctx,
        ));
        Ok(ExchangeHandle {
            id,
            task,
            shared: self.shared.clone(),
        })
    }

    /// Read the input surface, clear it, then submit what was read.
    ///
    /// The surface is cleared even when the text turns out to be blank.
    pub fn submit_input(&self, input: &dyn InputSurface) -> Result<ExchangeHandle, ExchangeError> {
        let text = input.value();
        input.clear();
        self.submit(text)
    }
}

async fn run_exchange(
    shared: Arc<Shared>,
    transport: Arc<dyn ChatTransport>,
    request: ChatRequest,
    ctx: RequestContext,
) -> Settlement {
    let span = info_span!(
        "exchange",
        request_id = %ctx.id,
        correlation = %ctx.correlation,
        model = %request.model
    );

    async move {
        let outcome = tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => {
                debug!("request cancelled before settling");
                return Settlement::Superseded;
            }
            _ = tokio::time::sleep(ctx.timeout) => {
                // Tell the transport to stop; its eventual result is dropped.
                ctx.cancel.cancel();
                Err(ExchangeError::Timeout)
            }
            result = transport.send(request, ctx.cancel.clone()) => {
                result.map_err(|e| e.classify())
            }
        };
        apply(&shared, &ctx, outcome)
    }
    .instrument(span)
    .await
}

/// Apply a settled outcome, unless a newer request has taken over.
fn apply(
    shared: &Shared,
    ctx: &RequestContext,
    outcome: Result<ChatReply, ExchangeError>,
) -> Settlement {
    let mut state = shared.lock();

    let is_current = state.current.as_ref().is_some_and(|c| c.id == ctx.id);
    if !is_current {
        debug!("discarding settlement of superseded request");
        return Settlement::Superseded;
    }
    state.current = None;

    let log_start = state.diagnostics.len();
    let settlement = match outcome {
        Ok(reply) => {
            debug!(diagnostics = reply.diagnostics.len(), "reply received");
            state.store.append(Message::assistant(reply.content));
            state.diagnostics.extend(reply.diagnostics);
            Settlement::Success
        }
        Err(error) => {
            warn!(error = %error, "exchange failed");
            if let Some(notice) = error.notice() {
                state.store.append(Message::system(notice.clone()));
                state.diagnostics.append(DiagnosticEntry::new(notice));
            }
            Settlement::from_error(error)
        }
    };

    if let Some(phase) = settlement.phase() {
        state.transition(phase);
    }

    let sink = &shared.sink;
    sink.render_transcript(state.store.messages());
    sink.render_diagnostics(&state.diagnostics.entries()[log_start..]);
    sink.set_busy(false);

    state.transition(ControllerPhase::Idle);
    settlement
}
