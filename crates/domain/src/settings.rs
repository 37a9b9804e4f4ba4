//! Clock Settings Domain Model
//!
//! Start-up choices for the clock view. The settings file carries only the
//! refresh strategy; everything else about the view is fixed. Settings are
//! read once and never written back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Refresh cadence of the clock view.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Longest interval a refresh timer may be armed with.
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Strategy used to keep the displayed timestamp current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RefreshMode {
    /// Refresh on a fixed interval for as long as the view is mounted.
    #[default]
    Interval,
    /// Refresh only when the application becomes active.
    OnForeground,
}

/// Clock settings.
///
/// Only `refreshMode` is read from disk. Unknown keys are rejected so a
/// stale file cannot smuggle in values the view no longer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClockSettings {
    /// Refresh strategy.
    pub refresh_mode: RefreshMode,
    /// Interval between refresh ticks in interval mode.
    #[serde(skip)]
    pub refresh_interval: Duration,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            refresh_mode: RefreshMode::default(),
            refresh_interval: REFRESH_INTERVAL,
        }
    }
}

impl ClockSettings {
    /// Checks that the refresh interval can be handed to a host timer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInterval`] for a zero interval or one
    /// longer than [`MAX_REFRESH_INTERVAL`].
    pub fn validate(&self) -> DomainResult<()> {
        if self.refresh_interval.is_zero() || self.refresh_interval > MAX_REFRESH_INTERVAL {
            return Err(DomainError::InvalidInterval(self.refresh_interval));
        }
        Ok(())
    }
}
