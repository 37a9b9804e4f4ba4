//! Lifecycle port for application foreground transitions.

use crate::task::TaskHandle;

/// Whether the application currently has the user's attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// The window is in the foreground.
    Active,
    /// The window lost focus or was hidden.
    Inactive,
}

/// Port delivering phase transitions.
pub trait LifecycleEvents {
    /// Registers `listener` for every phase change until the handle is
    /// cancelled or dropped.
    fn on_phase_change(&self, listener: Box<dyn FnMut(AppPhase)>) -> TaskHandle;
}
