//! Backward deletion

use tracing::debug;

use super::*;

impl EditEngine {
    /// Erase the selection, or the payload character left of the caret
    pub(super) fn delete(&self, buffer: &str, len: usize, selection: Selection) -> EditOutcome {
        let separator = self.config.separator();

        let range_start = if !selection.is_empty() {
            selection.start
        } else if selection.start == 0 {
            debug!("delete: caret at start, nothing to erase");
            return EditOutcome::Unchanged;
        } else if buffer.chars().nth(selection.start - 1) == Some(separator) {
            // Caret right after a separator: erase the payload character before it
            selection.start.saturating_sub(2)
        } else {
            selection.start - 1
        };

        let only_separators = buffer
            .chars()
            .skip(range_start)
            .take(selection.end - range_start)
            .all(|c| c == separator);
        if only_separators {
            debug!(
                "delete: range {}..{} holds only separators, nothing to erase",
                range_start, selection.end
            );
            return EditOutcome::Unchanged;
        }

        let formatted = self.format(&splice::remove_range(buffer, range_start, selection.end));
        let formatted_len = formatted.chars().count();
        let caret = self.caret_after_delete(range_start, selection.end, len, formatted_len);

        EditOutcome::Edited(EditResult::new(formatted, caret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backspace(engine: &EditEngine, buffer: &str, selection: Selection) -> EditOutcome {
        engine.handle(&EditRequest::new(buffer, selection, InputKey::Delete))
    }

    fn thousands() -> EditEngine {
        EditEngine::create(",", 3, Direction::Rtl).unwrap()
    }

    #[test]
    fn test_caret_at_start_is_unchanged() {
        assert_eq!(
            backspace(&thousands(), "1,234", Selection::caret(0)),
            EditOutcome::Unchanged
        );
    }

    #[test]
    fn test_selection_over_separator_and_digits() {
        assert_eq!(
            backspace(&thousands(), "12,345", Selection::new(1, 4)),
            EditOutcome::Edited(EditResult::new("145", 1))
        );
        assert_eq!(
            backspace(&thousands(), "12,345", Selection::new(2, 4)),
            EditOutcome::Edited(EditResult::new("1,245", 3))
        );
        assert_eq!(
            backspace(&thousands(), "12,345", Selection::new(0, 2)),
            EditOutcome::Edited(EditResult::new("345", 0))
        );
    }

    #[test]
    fn test_selection_of_lone_separator_is_unchanged() {
        assert_eq!(
            backspace(&thousands(), "12,345", Selection::new(2, 3)),
            EditOutcome::Unchanged
        );
    }

    #[test]
    fn test_rtl_caret_around_separator() {
        // After the second separator: erases the 4 before it
        assert_eq!(
            backspace(&thousands(), "1,234,567", Selection::caret(6)),
            EditOutcome::Edited(EditResult::new("123,567", 4))
        );
        // Before the second separator
        assert_eq!(
            backspace(&thousands(), "1,234,567", Selection::caret(5)),
            EditOutcome::Edited(EditResult::new("123,567", 3))
        );
        assert_eq!(
            backspace(&thousands(), "1,234,567", Selection::caret(1)),
            EditOutcome::Edited(EditResult::new("234,567", 0))
        );
        assert_eq!(
            backspace(&thousands(), "1,234,567", Selection::caret(9)),
            EditOutcome::Edited(EditResult::new("123,456", 7))
        );
    }

    #[test]
    fn test_ltr_caret_stays_left() {
        let engine = EditEngine::create("-", 2, Direction::Ltr).unwrap();
        assert_eq!(
            backspace(&engine, "12-34-5", Selection::caret(4)),
            EditOutcome::Edited(EditResult::new("12-45", 3))
        );
        // Right after a separator: erases the 2 before it
        assert_eq!(
            backspace(&engine, "12-34-5", Selection::caret(3)),
            EditOutcome::Edited(EditResult::new("13-45", 1))
        );
        assert_eq!(
            backspace(&engine, "12-3", Selection::caret(4)),
            EditOutcome::Edited(EditResult::new("12", 2))
        );
    }

    #[test]
    fn test_trailing_prefilled_separator() {
        let engine = EditEngine::create(" ", 4, Direction::Ltr).unwrap();
        assert_eq!(
            backspace(&engine, "1234 ", Selection::caret(5)),
            EditOutcome::Edited(EditResult::new("123", 3))
        );
    }
}
