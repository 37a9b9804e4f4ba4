//! TimeNow Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings loading.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::SystemClock;
pub use persistence::{SETTINGS_PATH_ENV, SettingsError, SettingsRepository};
pub use serialization::{SerializationError, from_json, from_json_bytes};
