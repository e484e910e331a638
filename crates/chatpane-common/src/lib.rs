pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ChatpaneError, ConfigError, ExchangeError, DECODE_NOTICE, TIMEOUT_NOTICE};
pub use events::{EventBus, SessionEvent};
pub use id::{new_correlation_id, new_id, RequestId, SessionId};
pub use types::{DiagnosticEntry, Message, Role};
