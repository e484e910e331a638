use crate::schema::ChatpaneConfig;

/// Validate the model selector choices.
pub(crate) fn validate_models(errors: &mut Vec<String>, config: &ChatpaneConfig) {
    let models = &config.models;

    if models.available.is_empty() {
        errors.push("models.available must list at least one model".into());
        return;
    }
    if models.available.iter().any(|m| m.trim().is_empty()) {
        errors.push("models.available contains a blank model name".into());
    }
    if !models.available.contains(&models.default) {
        errors.push(format!(
            "models.default = {:?} is not listed in models.available",
            models.default
        ));
    }
}
