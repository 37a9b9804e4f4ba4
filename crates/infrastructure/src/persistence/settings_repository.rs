//! Clock settings loading.
//!
//! Reads settings from the platform-specific config directory:
//! - Linux/macOS: ~/.config/timenow/settings.json
//! - Windows: %APPDATA%/timenow/settings.json
//!
//! The `TIMENOW_SETTINGS` environment variable overrides the location.
//! Settings are never written back.

use std::path::{Path, PathBuf};

use timenow_domain::{ClockSettings, DomainError};
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes};

/// Environment variable naming an explicit settings file.
pub const SETTINGS_PATH_ENV: &str = "TIMENOW_SETTINGS";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The file parsed but holds unusable values.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),
}

/// Read-only repository for clock settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository using `TIMENOW_SETTINGS` or the config directory.
    #[must_use]
    pub fn new() -> Self {
        let path = std::env::var_os(SETTINGS_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(Self::default_settings_path);
        Self { path }
    }

    /// Creates a repository reading from an explicit path.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the path to the TimeNow config directory.
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("timenow"))
    }

    /// Returns the default path of the settings file.
    #[must_use]
    pub fn default_settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Returns the path this repository reads, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads clock settings from disk.
    ///
    /// Returns default settings if no path is known or the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds values that fail validation.
    pub async fn load(&self) -> Result<ClockSettings, SettingsError> {
        let Some(path) = self.path.as_deref() else {
            tracing::debug!("no config directory, using default settings");
            return Ok(ClockSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(ClockSettings::default());
        }

        let content = fs::read(path).await?;
        let settings: ClockSettings = from_json_bytes(&content)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Loads settings, falling back to defaults on any error.
    pub async fn load_or_default(&self) -> ClockSettings {
        match self.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "could not load settings, using defaults");
                ClockSettings::default()
            }
        }
    }
}
