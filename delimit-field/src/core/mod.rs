//! Core field functionality
//!
//! This module contains key classification and the field controller.

pub mod field;
pub mod keycode;
