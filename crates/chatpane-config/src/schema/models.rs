use serde::{Deserialize, Serialize};

/// Model selector choices offered to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub available: Vec<String>,
    /// Initially selected model; must appear in `available`.
    pub default: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            available: vec!["gpt-3.5-turbo".into()],
            default: "gpt-3.5-turbo".into(),
        }
    }
}
