//! JSON handling for the settings file.

mod json;

pub use json::*;
