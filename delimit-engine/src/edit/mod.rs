//! Edit Engine - applies one keystroke to a delimited field
//!
//! This module contains the `EditEngine` struct that classifies the incoming
//! key, splices the formatted value, reformats it and places the caret.

mod caret;
mod delete;
mod insert;
mod types;

pub use types::*;

use tracing::trace;

use crate::config::{Direction, FieldConfig};
use crate::error::Result;
use crate::format::Formatter;
use crate::key::InputKey;
use crate::splice;

/// The delimited-text edit engine
///
/// Stateless apart from its configuration: every call to [`handle`](Self::handle)
/// is a pure function of the request.
#[derive(Debug, Clone)]
pub struct EditEngine {
    /// Field configuration
    config: FieldConfig,
    /// Formatter derived from the configuration
    formatter: Formatter,
}

impl EditEngine {
    /// Create an engine for the given configuration
    pub fn new(config: FieldConfig) -> Self {
        let formatter = Formatter::from_config(&config);
        Self { config, formatter }
    }

    /// Build the configuration and the engine in one step.
    ///
    /// Fails with [`ConfigError::InvalidSeparator`](crate::ConfigError::InvalidSeparator)
    /// unless `separator` is exactly one character.
    pub fn create(separator: &str, segment_width: usize, direction: Direction) -> Result<Self> {
        FieldConfig::new(separator, segment_width, direction).map(Self::new)
    }

    /// Get the configuration
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Format a flat or partially formatted value
    pub fn format(&self, value: &str) -> String {
        self.formatter.format(value)
    }

    /// Remove every separator, leaving the raw payload
    pub fn strip(&self, value: &str) -> String {
        self.formatter.strip(value)
    }

    /// Apply one key to a field snapshot
    pub fn handle(&self, request: &EditRequest<'_>) -> EditOutcome {
        let len = request.buffer.chars().count();
        let selection = request.selection.normalized(len);

        let outcome = match request.key {
            InputKey::Printable(ch) => {
                if !self.config.alphabet().accepts(ch) {
                    return EditOutcome::NotHandled;
                }
                self.insert(request.buffer, len, selection, ch)
            }
            InputKey::Delete => self.delete(request.buffer, len, selection),
        };

        trace!(
            "handle: key={} buffer={:?} selection={:?} -> {:?}",
            request.key, request.buffer, selection, outcome
        );
        outcome
    }
}
