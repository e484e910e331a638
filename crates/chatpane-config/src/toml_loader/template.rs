//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# chatpane configuration
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# base_url = "http://127.0.0.1:5000"
# mode = "conversation"    # conversation (/chat, whole history) | latest_message (/discuss)
# chat_path = "/chat"
# discuss_path = "/discuss"
# knowledge_path = "/knowledge"
# timeout_ms = 10000       # 500-120000

[models]
# available = ["gpt-3.5-turbo"]
# default = "gpt-3.5-turbo"

[persona]
# system_prompt = "You are a domain expert in industrial boilers."

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
