use std::path::PathBuf;

/// Notice appended when the deadline elapses before the reply arrives.
pub const TIMEOUT_NOTICE: &str = "Sorry, I'm taking too long to respond. Please try again.";

/// Notice appended when the reply body cannot be interpreted.
pub const DECODE_NOTICE: &str = "Unexpected response from the server.";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Every way a single submission can fail to produce an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("empty input")]
    EmptyInput,

    #[error("request timed out")]
    Timeout,

    #[error("remote error: HTTP {status}")]
    RemoteError { status: u16 },

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("decode failure: {0}")]
    DecodeFailure(String),
}

impl ExchangeError {
    /// Text shown to the user for this failure, or `None` when the failure
    /// is silent (blank input).
    pub fn notice(&self) -> Option<String> {
        let text = match self {
            ExchangeError::EmptyInput => return None,
            ExchangeError::Timeout => TIMEOUT_NOTICE.to_string(),
            ExchangeError::RemoteError { status } => format!("HTTP error status: {status}"),
            ExchangeError::TransportFailure(detail) => format!("Network error: {detail}"),
            ExchangeError::DecodeFailure(_) => DECODE_NOTICE.to_string(),
        };
        Some(format!(r#"<span style="color:red;">{text}</span>"#))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatpaneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
