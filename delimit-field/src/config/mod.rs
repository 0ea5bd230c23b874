//! Configuration management

pub mod settings;

pub use settings::{FieldSettings, LoggingSettings, Settings};
