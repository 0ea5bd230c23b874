//! Host widget capability
//!
//! The host owns the text and the selection. The engine only reads a
//! snapshot through [`HostField`] and hands a new snapshot back.

use delimit_engine::{EditResult, Selection};

/// What a text-input widget must expose to be driven by a [`DelimitedField`](super::DelimitedField)
pub trait HostField {
    /// Current (formatted) contents
    fn current_buffer(&self) -> &str;
    /// Current selection, in characters
    fn current_selection(&self) -> Selection;
    /// Replace the contents and collapse the selection to the result caret
    fn apply_result(&mut self, result: &EditResult);
    /// Stop the widget from running its own handling of the current key
    fn suppress_default(&mut self);
}

/// In-memory text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Field contents (source of truth)
    text: String,
    /// Selection (in characters, not bytes)
    selection: Selection,
    /// Set when any key since the last `take_suppressed` had its default
    /// handling suppressed
    default_suppressed: bool,
}

impl TextField {
    /// Create a new empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field with the given text and the caret at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            selection: Selection::caret(len),
            default_suppressed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret position (start of the selection)
    pub fn caret(&self) -> usize {
        self.selection.start
    }

    /// Text length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Collapse the selection at `pos` (clamped to the text)
    pub fn set_caret(&mut self, pos: usize) {
        self.selection = Selection::caret(pos.min(self.len()));
    }

    /// Select `start..end` (clamped to the text)
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.len();
        self.selection = Selection::new(start.min(len), end.min(len));
    }

    /// Clear the text and selection.
    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = Selection::default();
    }

    /// Return whether any key was suppressed since the previous call, and reset.
    pub fn take_suppressed(&mut self) -> bool {
        std::mem::take(&mut self.default_suppressed)
    }
}

impl HostField for TextField {
    fn current_buffer(&self) -> &str {
        &self.text
    }

    fn current_selection(&self) -> Selection {
        self.selection
    }

    fn apply_result(&mut self, result: &EditResult) {
        self.text.clone_from(&result.buffer);
        self.selection = result.selection();
    }

    fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }
}
