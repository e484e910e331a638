//! Tests for the full validation pipeline.

use super::*;
use crate::schema::ChatpaneConfig;

#[test]
fn default_config_validates() {
    let config = ChatpaneConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_timeout_too_small() {
    let mut config = ChatpaneConfig::default();
    config.endpoint.timeout_ms = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.timeout_ms"));
}

#[test]
fn catches_timeout_too_large() {
    let mut config = ChatpaneConfig::default();
    config.endpoint.timeout_ms = 600_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.timeout_ms"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = ChatpaneConfig::default();
    config.endpoint.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.base_url"));
}

#[test]
fn catches_relative_path() {
    let mut config = ChatpaneConfig::default();
    config.endpoint.discuss_path = "discuss".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.discuss_path"));
}

#[test]
fn catches_default_model_not_available() {
    let mut config = ChatpaneConfig::default();
    config.models.default = "falcon7b".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("models.default"));
}

#[test]
fn catches_empty_model_list() {
    let mut config = ChatpaneConfig::default();
    config.models.available.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("models.available"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ChatpaneConfig::default();
    config.endpoint.timeout_ms = 0;
    config.endpoint.chat_path = "chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.timeout_ms"));
    assert!(err.contains("endpoint.chat_path"));
    assert!(err.contains("; "));
}
