//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::PayloadMode;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_chatpane_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, chatpane_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[endpoint]
base_url = "http://localhost:8080"
mode = "latest_message"
timeout_ms = 2500

[persona]
system_prompt = "You are a domain expert in semiconductor."
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.base_url, "http://localhost:8080");
    assert_eq!(config.endpoint.mode, PayloadMode::LatestMessage);
    assert_eq!(config.endpoint.timeout_ms, 2500);
    assert_eq!(
        config.persona.prompt(),
        Some("You are a domain expert in semiconductor.")
    );
    // Defaults preserved
    assert_eq!(config.endpoint.discuss_path, "/discuss");
    assert_eq!(config.models.default, "gpt-3.5-turbo");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, chatpane_common::ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_are_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[endpoint]
timeout_ms = 5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.timeout_ms, 5);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chatpane").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.timeout_ms, 10_000);
    assert_eq!(config.endpoint.mode, PayloadMode::Conversation);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ChatpaneConfig;

    let config: ChatpaneConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("chatpane"));
        assert!(path_str.ends_with("config.toml"));
    }
}
