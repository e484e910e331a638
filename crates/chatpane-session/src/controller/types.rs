//! Controller configuration, lifecycle phases, and per-request context.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chatpane_common::{ExchangeError, RequestId};
use chatpane_config::{ChatpaneConfig, PayloadMode};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::manager::Shared;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Per-widget knobs for a controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Deadline for each exchange, fixed when the request is issued.
    pub timeout: Duration,
    pub mode: PayloadMode,
    /// Seeded as the first (system) message when present.
    pub persona: Option<String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            mode: PayloadMode::Conversation,
            persona: None,
        }
    }
}

impl ControllerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_mode(mut self, mode: PayloadMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }
}

impl From<&ChatpaneConfig> for ControllerConfig {
    fn from(config: &ChatpaneConfig) -> Self {
        Self {
            timeout: Duration::from_millis(u64::from(config.endpoint.timeout_ms)),
            mode: config.endpoint.mode,
            persona: config.persona.prompt().map(str::to_string),
        }
    }
}

/// Lifecycle of the controller. Settled phases are transient: the
/// controller passes through one and lands back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    Sending,
    SettledSuccess,
    SettledTimeout,
    SettledError,
}

impl fmt::Display for ControllerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerPhase::Idle => "idle",
            ControllerPhase::Sending => "sending",
            ControllerPhase::SettledSuccess => "settled-success",
            ControllerPhase::SettledTimeout => "settled-timeout",
            ControllerPhase::SettledError => "settled-error",
        };
        f.write_str(name)
    }
}

/// How one submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The assistant reply was appended.
    Success,
    /// The deadline elapsed first; a timeout notice was appended.
    Timeout,
    /// The exchange failed; an error notice was appended.
    Error(ExchangeError),
    /// A newer submission cancelled this one; nothing was applied.
    Superseded,
}

impl Settlement {
    pub(crate) fn from_error(error: ExchangeError) -> Self {
        match error {
            ExchangeError::Timeout => Settlement::Timeout,
            other => Settlement::Error(other),
        }
    }

    /// Phase the controller passes through when this settlement is applied.
    pub fn phase(&self) -> Option<ControllerPhase> {
        match self {
            Settlement::Success => Some(ControllerPhase::SettledSuccess),
            Settlement::Timeout => Some(ControllerPhase::SettledTimeout),
            Settlement::Error(_) => Some(ControllerPhase::SettledError),
            Settlement::Superseded => None,
        }
    }

    /// The failure behind this settlement, if any.
    pub fn error(&self) -> Option<ExchangeError> {
        match self {
            Settlement::Timeout => Some(ExchangeError::Timeout),
            Settlement::Error(e) => Some(e.clone()),
            Settlement::Success | Settlement::Superseded => None,
        }
    }
}

/// The in-flight part of a request that outlives `submit`: its id and the
/// token that cancels it.
#[derive(Debug, Clone)]
pub(crate) struct RequestContext {
    pub(crate) id: RequestId,
    pub(crate) correlation: String,
    pub(crate) cancel: CancellationToken,
    pub(crate) timeout: Duration,
}

/// Handle to a running exchange.
pub struct ExchangeHandle {
    pub(super) id: RequestId,
    pub(super) task: JoinHandle<Settlement>,
    pub(super) shared: Arc<Shared>,
}

impl ExchangeHandle {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Wait for the exchange to settle.
    pub async fn settled(self) -> Settlement {
        match self.task.await {
            Ok(settlement) => settlement,
            Err(e) => {
                tracing::warn!(request_id = %self.id, error = %e, "exchange task did not complete");
                // The task died before (or while) applying; release the slot it held.
                self.shared.abandon(self.id);
                Settlement::Error(ExchangeError::TransportFailure(e.to_string()))
            }
        }
    }
}

impl fmt::Debug for ExchangeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeHandle")
            .field("id", &self.id)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}
