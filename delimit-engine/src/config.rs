//! Field configuration
//!
//! A [`FieldConfig`] is built once per input field and shared by every edit
//! on that field. The separator and segment width are validated; everything
//! else is taken as given.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Which end of the payload segments are counted from
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Groups counted from the start; the last group may be short (`82741-93760-1`)
    #[default]
    Ltr,
    /// Groups counted from the end; the first group may be short (`1,234,567`)
    Rtl,
}

/// Characters accepted as payload
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// ASCII digits only
    #[default]
    Digits,
    /// ASCII letters and digits
    Alphanumeric,
}

impl Alphabet {
    /// Check if `ch` belongs to this alphabet
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Alphabet::Digits => ch.is_ascii_digit(),
            Alphabet::Alphanumeric => ch.is_ascii_alphanumeric(),
        }
    }
}

/// Common field layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Thousands grouping: `1,234,567`
    Thousands,
    /// Payment card number: `4820 6728 8291 5824`
    CardNumber,
    /// Product key: `82741-93760-19585`
    SerialKey,
}

/// Configuration for one delimited input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    separator: char,
    segment_width: usize,
    direction: Direction,
    alphabet: Alphabet,
    max_length: Option<usize>,
    overwrite: bool,
    prefill: bool,
}

impl FieldConfig {
    /// Create a configuration with the given separator, segment width and direction.
    ///
    /// Fails with [`ConfigError::InvalidSeparator`] unless `separator` is exactly
    /// one character, and with [`ConfigError::InvalidSegmentWidth`] if
    /// `segment_width` is zero.
    pub fn new(separator: &str, segment_width: usize, direction: Direction) -> Result<Self> {
        let mut chars = separator.chars();
        let (Some(separator_char), None) = (chars.next(), chars.next()) else {
            return Err(ConfigError::invalid_separator(separator));
        };
        if segment_width == 0 {
            return Err(ConfigError::InvalidSegmentWidth(segment_width));
        }

        Ok(Self {
            separator: separator_char,
            segment_width,
            direction,
            alphabet: Alphabet::default(),
            max_length: None,
            overwrite: false,
            prefill: false,
        })
    }

    /// Create a configuration for one of the built-in layouts
    pub fn preset(preset: Preset) -> Self {
        let (separator, segment_width, direction) = match preset {
            Preset::Thousands => (',', 3, Direction::Rtl),
            Preset::CardNumber => (' ', 4, Direction::Ltr),
            Preset::SerialKey => ('-', 5, Direction::Ltr),
        };
        let config = Self {
            separator,
            segment_width,
            direction,
            alphabet: Alphabet::Digits,
            max_length: None,
            overwrite: false,
            prefill: false,
        };
        match preset {
            Preset::Thousands => config,
            Preset::CardNumber => config.with_max_length(Some(19)).with_prefill(true),
            Preset::SerialKey => config
                .with_alphabet(Alphabet::Alphanumeric)
                .with_max_length(Some(17)),
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Bound the length of the formatted value (separators included)
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Replace instead of push when the field is full and nothing is selected
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Append the separator as soon as a segment is completed
    pub fn with_prefill(mut self, prefill: bool) -> Self {
        self.prefill = prefill;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Payload characters per segment
    pub fn segment_width(&self) -> usize {
        self.segment_width
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn prefill(&self) -> bool {
        self.prefill
    }

    /// Length of one full segment plus its separator
    pub(crate) fn stride(&self) -> usize {
        self.segment_width() + 1
    }
}
