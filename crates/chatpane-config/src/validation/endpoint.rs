use crate::schema::ChatpaneConfig;

use super::helpers::{validate_path, validate_range};

/// Validate endpoint constraints.
pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &ChatpaneConfig) {
    let endpoint = &config.endpoint;

    let base = endpoint.base_url.trim();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        errors.push(format!(
            "endpoint.base_url = {:?} must be an http(s) URL",
            endpoint.base_url
        ));
    }

    validate_path(errors, "endpoint.chat_path", &endpoint.chat_path);
    validate_path(errors, "endpoint.discuss_path", &endpoint.discuss_path);
    validate_path(errors, "endpoint.knowledge_path", &endpoint.knowledge_path);
    validate_range(errors, "endpoint.timeout_ms", endpoint.timeout_ms, 500, 120_000);
}
