//! Type definitions for the edit engine

use crate::key::InputKey;

/// Selection range in characters (`start..end`); a caret when `start == end`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `pos`
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.abs_diff(self.start)
    }

    /// Order the bounds and clamp them to `len`.
    pub(crate) fn normalized(&self, len: usize) -> Self {
        let (start, end) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        Self::new(start.min(len), end.min(len))
    }
}

/// Snapshot of a field at the moment a key arrives
#[derive(Debug, Clone, Copy)]
pub struct EditRequest<'a> {
    /// Current formatted value
    pub buffer: &'a str,
    /// Current selection
    pub selection: Selection,
    /// The key to apply
    pub key: InputKey,
}

impl<'a> EditRequest<'a> {
    pub fn new(buffer: &'a str, selection: Selection, key: InputKey) -> Self {
        Self {
            buffer,
            selection,
            key,
        }
    }
}

/// New field contents after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// New formatted value
    pub buffer: String,
    /// New caret position (in characters)
    pub caret: usize,
}

impl EditResult {
    pub fn new(buffer: impl Into<String>, caret: usize) -> Self {
        Self {
            buffer: buffer.into(),
            caret,
        }
    }

    pub fn selection(&self) -> Selection {
        Selection::caret(self.caret)
    }
}

/// Outcome of handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The field changed
    Edited(EditResult),
    /// The key was handled but the field stays as it is
    Unchanged,
    /// The key is not ours; the host should apply its default behavior
    NotHandled,
}

impl EditOutcome {
    /// Whether the host should suppress its default handling of the key
    pub fn is_handled(&self) -> bool {
        !matches!(self, EditOutcome::NotHandled)
    }

    /// Get the edit result, if the field changed
    pub fn result(&self) -> Option<&EditResult> {
        match self {
            EditOutcome::Edited(result) => Some(result),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<EditResult> {
        match self {
            EditOutcome::Edited(result) => Some(result),
            _ => None,
        }
    }
}
