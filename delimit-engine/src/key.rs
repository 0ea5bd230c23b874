//! Platform-independent key classification

use std::fmt;

/// A single keystroke as seen by the edit engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// A character key (already case-normalized by the caller)
    Printable(char),
    /// Backward delete (BackSpace)
    Delete,
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKey::Printable(ch) => write!(f, "{}", ch),
            InputKey::Delete => write!(f, "<bs>"),
        }
    }
}
