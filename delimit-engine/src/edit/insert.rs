//! Character insertion

use tracing::debug;

use super::*;

impl EditEngine {
    /// Insert `ch` over `selection` (already normalized against `len`)
    pub(super) fn insert(
        &self,
        buffer: &str,
        len: usize,
        selection: Selection,
        ch: char,
    ) -> EditOutcome {
        let separator = self.config.separator();
        let mut range = selection;

        if let Some(max) = self.config.max_length()
            && len >= max
            && selection.is_empty()
        {
            if !self.config.overwrite() {
                debug!("insert: field full ({}/{}), key dropped", len, max);
                return EditOutcome::Unchanged;
            }
            // Replace the payload character at the caret, stepping over a separator
            let mut pos = selection.start;
            if buffer.chars().nth(pos) == Some(separator) {
                pos += 1;
            }
            if pos >= len {
                debug!("insert: nothing to overwrite at {}", pos);
                return EditOutcome::Unchanged;
            }
            range = Selection::new(pos, pos + 1);
        }

        let spliced = splice::remove_range(buffer, range.start, range.end);
        let spliced_len = spliced.chars().count();
        let mut formatted = self.format(&splice::insert_at(&spliced, ch, range.start));
        let formatted_len = formatted.chars().count();

        if let Some(max) = self.config.max_length()
            && formatted_len > max
        {
            debug!(
                "insert: result {:?} exceeds max length {}, key dropped",
                formatted, max
            );
            return EditOutcome::Unchanged;
        }

        let mut caret = self.caret_after_insert(range.start, spliced_len, formatted_len);

        if self.should_prefill(formatted_len) {
            formatted.push(separator);
            if caret == formatted_len {
                caret += 1;
            }
        }

        let caret = caret.min(formatted.chars().count());
        EditOutcome::Edited(EditResult::new(formatted, caret))
    }

    /// A completed segment gets its separator early if there is room for more input
    fn should_prefill(&self, formatted_len: usize) -> bool {
        self.config.prefill()
            && formatted_len < self.config.max_length().unwrap_or(usize::MAX)
            && (formatted_len + 1) % self.config.stride() == 0
    }
}
