//! Error types for field configuration

/// Errors that can occur while building a [`FieldConfig`](crate::FieldConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The separator was not exactly one character.
    #[error("invalid separator: expected exactly one character, got {kind} {value:?}")]
    InvalidSeparator {
        /// Shape of the received value (e.g. "empty string", "string of 3 characters")
        kind: String,
        /// The received value
        value: String,
    },

    /// The segment width was zero.
    #[error("invalid segment width: expected a positive number, got {0}")]
    InvalidSegmentWidth(usize),
}

impl ConfigError {
    pub(crate) fn invalid_separator(value: &str) -> Self {
        let kind = match value.chars().count() {
            0 => "empty string".to_string(),
            n => format!("string of {} characters", n),
        };
        Self::InvalidSeparator {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_reports_kind_and_value() {
        let err = ConfigError::invalid_separator("abc");
        assert_eq!(
            err.to_string(),
            "invalid separator: expected exactly one character, got string of 3 characters \"abc\""
        );
    }

    #[test]
    fn test_message_for_empty_separator() {
        let err = ConfigError::invalid_separator("");
        assert!(err.to_string().contains("empty string"));
    }

    #[test]
    fn test_message_for_zero_width() {
        let err = ConfigError::InvalidSegmentWidth(0);
        assert_eq!(
            err.to_string(),
            "invalid segment width: expected a positive number, got 0"
        );
    }
}
