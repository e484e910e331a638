//! Configuration schema types for chatpane.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod endpoint;
mod models;
mod persona;
mod system;

pub use endpoint::*;
pub use models::*;
pub use persona::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a chat widget.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatpaneConfig {
    pub endpoint: EndpointConfig,
    pub models: ModelsConfig,
    pub persona: PersonaConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let config = ChatpaneConfig::default();
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.endpoint.mode, PayloadMode::Conversation);
        assert_eq!(config.endpoint.timeout_ms, 10_000);
        assert_eq!(config.endpoint.exchange_path(), "/chat");
    }

    #[test]
    fn latest_message_mode_uses_discuss_path() {
        let mut config = ChatpaneConfig::default();
        config.endpoint.mode = PayloadMode::LatestMessage;
        assert_eq!(config.endpoint.exchange_path(), "/discuss");
    }

    #[test]
    fn default_models() {
        let config = ChatpaneConfig::default();
        assert_eq!(config.models.default, "gpt-3.5-turbo");
        assert!(config.models.available.contains(&config.models.default));
    }

    #[test]
    fn blank_persona_is_none() {
        let mut persona = PersonaConfig::default();
        assert!(persona.prompt().is_none());
        persona.system_prompt = "   ".into();
        assert!(persona.prompt().is_none());
        persona.system_prompt = " You are a domain expert in industrial boilers. ".into();
        assert_eq!(
            persona.prompt(),
            Some("You are a domain expert in industrial boilers.")
        );
    }

    #[test]
    fn payload_mode_parses_snake_case() {
        let config: ChatpaneConfig = toml::from_str(
            r#"
[endpoint]
mode = "latest_message"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint.mode, PayloadMode::LatestMessage);
        assert_eq!(config.endpoint.chat_path, "/chat");
    }

    #[test]
    fn log_level_filters() {
        assert_eq!(LogLevel::Warning.as_filter(), "warn");
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
    }
}
