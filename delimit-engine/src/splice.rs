//! Text splice primitives
//!
//! Offsets are in characters, not bytes. Both functions are total: offsets
//! past the end are clamped to the end of the text.

/// Byte offset of the `char_pos`-th character (or the text length).
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Return `text` with the characters in `start..end` removed.
///
/// `start >= end` removes nothing.
pub fn remove_range(text: &str, start: usize, end: usize) -> String {
    if start >= end {
        return text.to_string();
    }
    let byte_start = byte_offset(text, start);
    let byte_end = byte_offset(text, end);
    let mut out = String::with_capacity(text.len() - (byte_end - byte_start));
    out.push_str(&text[..byte_start]);
    out.push_str(&text[byte_end..]);
    out
}

/// Return `text` with `ch` inserted immediately before character offset `pos`.
pub fn insert_at(text: &str, ch: char, pos: usize) -> String {
    let byte_pos = byte_offset(text, pos);
    let mut out = String::with_capacity(text.len() + ch.len_utf8());
    out.push_str(&text[..byte_pos]);
    out.push(ch);
    out.push_str(&text[byte_pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_range() {
        assert_eq!(remove_range("12,345", 1, 4), "145");
        assert_eq!(remove_range("12,345", 2, 3), "12345");
        assert_eq!(remove_range("12,345", 0, 6), "");
    }

    #[test]
    fn test_remove_empty_range_is_noop() {
        assert_eq!(remove_range("12,345", 3, 3), "12,345");
        assert_eq!(remove_range("12,345", 4, 2), "12,345");
    }

    #[test]
    fn test_remove_range_clamps() {
        assert_eq!(remove_range("123", 2, 10), "12");
        assert_eq!(remove_range("123", 5, 10), "123");
    }

    #[test]
    fn test_insert_at() {
        assert_eq!(insert_at("12345", '9', 0), "912345");
        assert_eq!(insert_at("12345", '9', 2), "129345");
        assert_eq!(insert_at("12345", '9', 5), "123459");
        assert_eq!(insert_at("", '9', 0), "9");
        assert_eq!(insert_at("12", '9', 7), "129");
    }

    #[test]
    fn test_char_offsets() {
        assert_eq!(remove_range("あい,う", 1, 3), "あう");
        assert_eq!(insert_at("あいう", 'x', 1), "あxいう");
    }
}
