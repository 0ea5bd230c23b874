pub mod config;
pub mod edit;
pub mod error;
pub mod format;
pub mod key;
pub mod splice;

pub use config::{Alphabet, Direction, FieldConfig, Preset};
pub use edit::{EditEngine, EditOutcome, EditRequest, EditResult, Selection};
pub use error::ConfigError;
pub use format::{Formatter, strip};
pub use key::InputKey;
