//! Segment formatting
//!
//! Re-derives the delimited form of a value from scratch: separators are
//! stripped, the payload is cut into fixed-width groups and the groups are
//! joined back with the separator. The caret plays no part here.

use crate::config::{Direction, FieldConfig};

/// Remove every occurrence of `separator` from `value`.
pub fn strip(value: &str, separator: char) -> String {
    value.chars().filter(|&c| c != separator).collect()
}

/// Direction-aware segment formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    separator: char,
    segment_width: usize,
    direction: Direction,
}

impl Formatter {
    pub fn new(separator: char, segment_width: usize, direction: Direction) -> Self {
        Self {
            separator,
            segment_width: segment_width.max(1),
            direction,
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(
            config.separator(),
            config.segment_width(),
            config.direction(),
        )
    }

    /// Format a flat or partially formatted value.
    pub fn format(&self, value: &str) -> String {
        let payload: Vec<char> = value.chars().filter(|&c| c != self.separator).collect();
        if payload.is_empty() {
            return String::new();
        }

        // RTL: the short group (if any) goes first
        let head_len = match self.direction {
            Direction::Ltr => 0,
            Direction::Rtl => payload.len() % self.segment_width,
        };
        let (head, rest) = payload.split_at(head_len);

        let groups = std::iter::once(head)
            .filter(|g| !g.is_empty())
            .chain(rest.chunks(self.segment_width));

        let mut out = String::with_capacity(payload.len() + payload.len() / self.segment_width);
        for (i, group) in groups.enumerate() {
            if i > 0 {
                out.push(self.separator);
            }
            out.extend(group);
        }
        out
    }

    /// Remove every separator from `value`.
    pub fn strip(&self, value: &str) -> String {
        strip(value, self.separator)
    }
}
