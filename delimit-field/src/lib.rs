//! delimit-field: delimited input fields for host widgets
//!
//! This crate binds the delimit-engine edit engine to text-input widgets:
//! raw key events are classified, the engine is consulted, and the result is
//! applied through the host's [`HostField`] capability.

pub mod config;
pub mod core;
pub mod logging;

pub use config::Settings;
pub use core::field::{DelimitedField, FieldResult, HostField, TextField};
pub use core::keycode::{KeyEvent, KeyModifiers, Keysym};
pub use logging::init_logging;
