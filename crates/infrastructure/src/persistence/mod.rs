//! File-backed settings.

mod settings_repository;

pub use settings_repository::{SETTINGS_PATH_ENV, SettingsError, SettingsRepository};
