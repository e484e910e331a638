//! SessionController struct and shared session state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chatpane_common::{DiagnosticEntry, Message, RequestId, SessionId};
use tracing::debug;

use crate::render::RenderSink;
use crate::selector::ModelSelector;
use crate::store::{ConversationStore, DiagnosticLog};
use crate::ChatTransport;

use super::types::{ControllerConfig, ControllerPhase, RequestContext};

/// Everything an exchange task may touch after `submit` returns.
pub(super) struct SessionState {
    pub(super) store: ConversationStore,
    pub(super) diagnostics: DiagnosticLog,
    pub(super) phase: ControllerPhase,
    /// The only request allowed to apply a settlement.
    pub(super) current: Option<RequestContext>,
    pub(super) next_id: RequestId,
}

impl SessionState {
    pub(super) fn transition(&mut self, to: ControllerPhase) {
        debug!(from = %self.phase, to = %to, "controller phase");
        self.phase = to;
    }
}

pub(super) struct Shared {
    state: Mutex<SessionState>,
    pub(super) sink: Arc<dyn RenderSink>,
}

impl Shared {
    /// Lock session state. Never held across an `.await`.
    pub(super) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return to `Idle` after the task for `id` died before settling.
    ///
    /// Covers a task lost while still current and one lost part-way through
    /// applying (current already cleared, phase not yet back to `Idle`).
    /// No-op once a newer request has taken over.
    pub(super) fn abandon(&self, id: RequestId) {
        let mut state = self.lock();
        let stranded = match &state.current {
            Some(current) => current.id == id,
            None => state.phase != ControllerPhase::Idle,
        };
        if stranded {
            state.current = None;
            state.transition(ControllerPhase::Idle);
            self.sink.set_busy(false);
        }
    }
}

/// One chat session: a conversation, its diagnostic log, and the request
/// lifecycle that feeds them.
pub struct SessionController {
    pub(super) id: SessionId,
    pub(super) config: ControllerConfig,
    pub(super) shared: Arc<Shared>,
    pub(super) transport: Arc<dyn ChatTransport>,
    pub(super) selector: Arc<dyn ModelSelector>,
}

impl SessionController {
    pub fn new(
        config: ControllerConfig,
        transport: Arc<dyn ChatTransport>,
        selector: Arc<dyn ModelSelector>,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        let store = match config.persona.as_deref() {
            Some(persona) => ConversationStore::with_persona(persona),
            None => ConversationStore::new(),
        };
        let state = SessionState {
            store,
            diagnostics: DiagnosticLog::new(),
            phase: ControllerPhase::Idle,
            current: None,
            next_id: RequestId::FIRST,
        };
        let id = SessionId::new();
        debug!(session = %id, timeout_ms = config.timeout.as_millis() as u64, mode = ?config.mode, "session created");

        Self {
            id,
            config,
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                sink,
            }),
            transport,
            selector,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn phase(&self) -> ControllerPhase {
        self.shared.lock().phase
    }

    /// Whether an exchange is outstanding.
    pub fn is_busy(&self) -> bool {
        self.shared.lock().current.is_some()
    }

    /// Snapshot of the conversation.
    pub fn messages(&self) -> Vec<Message> {
        self.shared.lock().store.snapshot()
    }

    /// Snapshot of the diagnostic log.
    pub fn diagnostics(&self) -> Vec<DiagnosticEntry> {
        self.shared.lock().diagnostics.entries().to_vec()
    }

    /// Push the complete current state to the sink (initial paint).
    pub fn render_all(&self) {
        let state = self.shared.lock();
        let sink = &self.shared.sink;
        sink.render_transcript(state.store.messages());
        sink.render_diagnostics(state.diagnostics.entries());
        sink.set_busy(state.current.is_some());
    }
}
