//! Caret placement after an edit
//!
//! LTR regrouping never moves separators left of the edit point, so LTR
//! carets are measured from the start. RTL regrouping never moves separators
//! right of it, so RTL carets are measured from the end (or by the change in
//! length, which amounts to the same thing).

use super::*;

impl EditEngine {
    /// Caret after inserting one character at `pos`.
    ///
    /// `spliced_len` is the length of the value after the selection was removed
    /// and before the character was inserted; `formatted_len` is the final length.
    pub(super) fn caret_after_insert(
        &self,
        pos: usize,
        spliced_len: usize,
        formatted_len: usize,
    ) -> usize {
        match self.config.direction() {
            Direction::Ltr => {
                let width = self.config.segment_width();
                // Typing at the end of a full segment: hop over the new separator
                let boundary = pos % self.config.stride() == width;
                pos + 1 + usize::from(boundary)
            }
            Direction::Rtl => (pos + formatted_len).saturating_sub(spliced_len),
        }
    }

    /// Caret after removing `range_start..end` from a value of length `len`.
    pub(super) fn caret_after_delete(
        &self,
        range_start: usize,
        end: usize,
        len: usize,
        formatted_len: usize,
    ) -> usize {
        let caret = match self.config.direction() {
            Direction::Ltr => range_start,
            Direction::Rtl => formatted_len.saturating_sub(len - end),
        };
        caret.min(formatted_len)
    }
}
