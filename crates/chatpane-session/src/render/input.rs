//! The text box a submission is read from.

use std::sync::{Mutex, PoisonError};

pub trait InputSurface {
    fn value(&self) -> String;
    fn clear(&self);
}

/// In-memory input box.
#[derive(Debug, Default)]
pub struct TextInput {
    value: Mutex<String>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&self, text: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }
}

impl InputSurface for TextInput {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
