//! Tests for the field controller

use super::*;
use crate::core::keycode::{KeyModifiers, Keysym};
use delimit_engine::{Alphabet, Direction, Preset, Selection};

mod typing;

fn press(ch: char) -> KeyEvent {
    KeyEvent::press(Keysym::from_char(ch))
}

fn press_key(keysym: Keysym) -> KeyEvent {
    KeyEvent::press(keysym)
}

fn release_key(keysym: Keysym) -> KeyEvent {
    KeyEvent::new(keysym, KeyModifiers::default(), false)
}

fn press_shift(ch: char) -> KeyEvent {
    KeyEvent::new(
        Keysym::from_char(ch),
        KeyModifiers::new().with_shift(true),
        true,
    )
}

fn press_ctrl(keysym: Keysym) -> KeyEvent {
    KeyEvent::new(keysym, KeyModifiers::new().with_control(true), true)
}

fn thousands() -> DelimitedField {
    DelimitedField::new(FieldConfig::preset(Preset::Thousands))
}

/// Type every character of `keys` into `host`
fn type_keys(field: &DelimitedField, host: &mut TextField, keys: &str) {
    for ch in keys.chars() {
        field.process_key(host, &press(ch));
    }
}
