//! Settings configuration
//!
//! Manages user-configurable settings for delimited fields.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use delimit_engine::{Alphabet, ConfigError, Direction, FieldConfig};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Field layout settings
    pub field: FieldSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Field layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Separator (must be exactly one character)
    pub separator: String,
    /// Payload characters per group
    pub segment_width: usize,
    /// Grouping direction (ltr, rtl)
    pub direction: Direction,
    /// Accepted characters (digits, alphanumeric)
    pub alphabet: Alphabet,
    /// Maximum formatted length, separators included
    pub max_length: Option<usize>,
    /// Replace instead of push when the field is full
    pub overwrite: bool,
    /// Append the separator as soon as a group is complete
    pub prefill: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default tracing filter (used when RUST_LOG is unset)
    pub filter: String,
}

impl FieldSettings {
    /// Capture an engine configuration as settings
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            separator: config.separator().to_string(),
            segment_width: config.segment_width(),
            direction: config.direction(),
            alphabet: config.alphabet(),
            max_length: config.max_length(),
            overwrite: config.overwrite(),
            prefill: config.prefill(),
        }
    }

    /// Build the engine configuration.
    ///
    /// Fails if the separator is not exactly one character or the segment
    /// width is zero.
    pub fn to_config(&self) -> std::result::Result<FieldConfig, ConfigError> {
        Ok(
            FieldConfig::new(&self.separator, self.segment_width, self.direction)?
                .with_alphabet(self.alphabet)
                .with_max_length(self.max_length)
                .with_overwrite(self.overwrite)
                .with_prefill(self.prefill),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

/// Get the project directories for delimit.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "delimit", "delimit")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        let content = fs::read_to_string(&config_file)?;
        parse_with_defaults(&content)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to the default configuration file
    pub fn save(&self) -> Result<()> {
        let Some(config_file) = Self::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&config_file)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("Saving config to {:?}", path);
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
