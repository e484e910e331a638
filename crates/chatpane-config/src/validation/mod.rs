//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod endpoint;
mod helpers;
mod models;

#[cfg(test)]
mod tests;

use crate::schema::ChatpaneConfig;
use chatpane_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatpaneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    models::validate_models(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
