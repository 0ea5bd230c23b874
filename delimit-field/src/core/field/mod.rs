//! Field controller - drives one edit engine against one host field
//!
//! This module contains the `DelimitedField` struct that turns raw key events
//! into engine requests and applies the outcome to the host.

mod host;

pub use host::{HostField, TextField};

#[cfg(test)]
mod tests;

use delimit_engine::{EditEngine, EditOutcome, EditRequest, EditResult, FieldConfig};
use tracing::{debug, trace};

use super::keycode::KeyEvent;

/// Result of processing a key event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldResult {
    /// Whether the key was consumed (host default handling suppressed)
    pub consumed: bool,
    /// The edit applied to the host, if the field changed
    pub edit: Option<EditResult>,
}

impl FieldResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            edit: None,
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            edit: None,
        }
    }

    pub fn with_edit(mut self, edit: EditResult) -> Self {
        self.edit = Some(edit);
        self
    }
}

/// A delimited input field: an edit engine bound to host widgets
#[derive(Debug, Clone)]
pub struct DelimitedField {
    engine: EditEngine,
}

impl DelimitedField {
    /// Create a controller for the given configuration
    pub fn new(config: FieldConfig) -> Self {
        Self {
            engine: EditEngine::new(config),
        }
    }

    /// Get the underlying engine
    pub fn engine(&self) -> &EditEngine {
        &self.engine
    }

    /// Process a key event against `host`
    pub fn process_key<H: HostField + ?Sized>(&self, host: &mut H, key: &KeyEvent) -> FieldResult {
        // Log modifier key events for debugging key mapping issues
        if key.keysym.is_modifier() {
            debug!(
                "modifier key: keysym=0x{:04x} press={} modifiers={:?}",
                key.keysym.0, key.is_press, key.modifiers
            );
        }

        let Some(input_key) = key.to_input_key() else {
            return FieldResult::not_consumed();
        };

        trace!("Processing key: {} as {:?}", key.keysym, input_key);

        let request = EditRequest::new(
            host.current_buffer(),
            host.current_selection(),
            input_key,
        );
        match self.engine.handle(&request) {
            EditOutcome::NotHandled => FieldResult::not_consumed(),
            EditOutcome::Unchanged => {
                host.suppress_default();
                FieldResult::consumed()
            }
            EditOutcome::Edited(result) => {
                host.suppress_default();
                host.apply_result(&result);
                FieldResult::consumed().with_edit(result)
            }
        }
    }

    /// Reformat whatever the host currently holds (e.g. a programmatic or
    /// pasted value) and move the caret to the end.
    pub fn normalize<H: HostField + ?Sized>(&self, host: &mut H) -> EditResult {
        let formatted = self.engine.format(host.current_buffer());
        let caret = formatted.chars().count();
        let result = EditResult::new(formatted, caret);
        host.apply_result(&result);
        result
    }

    /// Raw payload of the host field, separators removed
    pub fn payload<H: HostField + ?Sized>(&self, host: &H) -> String {
        self.engine.strip(host.current_buffer())
    }
}
