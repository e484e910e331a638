//! Model selector: where the controller reads the model name at submit time.

use std::sync::{Arc, PoisonError, RwLock};

pub trait ModelSelector: Send + Sync {
    /// Currently selected model. Read once per submission.
    fn selected_model(&self) -> String;
}

/// A selector that never changes.
#[derive(Debug, Clone)]
pub struct FixedModel(String);

impl FixedModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }
}

impl ModelSelector for FixedModel {
    fn selected_model(&self) -> String {
        self.0.clone()
    }
}

/// A shared, switchable selection (the drop-down in a multi-model widget).
///
/// Clones share the same selection.
#[derive(Debug, Clone)]
pub struct ModelChoice {
    current: Arc<RwLock<String>>,
}

impl ModelChoice {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial.into())),
        }
    }

    pub fn select(&self, model: impl Into<String>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = model.into();
    }
}

impl ModelSelector for ModelChoice {
    fn selected_model(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
