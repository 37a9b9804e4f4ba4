//! Window focus as application lifecycle.

use std::cell::RefCell;

use timenow_application::{AppPhase, LifecycleEvents, Observable, TaskHandle, WeakObservable};

use crate::MainWindow;

/// [`LifecycleEvents`] driven by the main window's keyboard focus.
///
/// Gaining focus is [`AppPhase::Active`], losing it is [`AppPhase::Inactive`].
#[derive(Clone)]
pub struct WindowLifecycle {
    phase: Observable<AppPhase>,
}

impl WindowLifecycle {
    /// Creates a lifecycle source not yet bound to a window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Observable::new(AppPhase::Inactive),
        }
    }

    /// Creates a lifecycle source fed by `window`'s focus callback.
    ///
    /// The window only holds a weak reference; the caller keeps the source
    /// alive.
    #[must_use]
    pub fn attach(window: &MainWindow) -> Self {
        let lifecycle = Self::new();
        let feed = lifecycle.downgraded();
        window.on_focus_changed(move |focused| {
            if let Some(lifecycle) = feed.upgrade() {
                lifecycle.focus_changed(focused);
            }
        });
        lifecycle
    }

    /// Records a focus transition and notifies listeners.
    pub fn focus_changed(&self, focused: bool) {
        let phase = if focused {
            AppPhase::Active
        } else {
            AppPhase::Inactive
        };
        tracing::debug!(?phase, "window phase changed");
        self.phase.set(phase);
    }

    /// Most recent phase.
    #[must_use]
    pub fn phase(&self) -> AppPhase {
        self.phase.get()
    }

    fn downgraded(&self) -> WeakLifecycle {
        WeakLifecycle {
            phase: self.phase.downgrade(),
        }
    }
}

impl Default for WindowLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleEvents for WindowLifecycle {
    fn on_phase_change(&self, listener: Box<dyn FnMut(AppPhase)>) -> TaskHandle {
        let listener = RefCell::new(listener);
        self.phase
            .subscribe(move |phase| {
                if let Ok(mut listener) = listener.try_borrow_mut() {
                    (&mut *listener)(*phase);
                }
            })
            .into_handle()
    }
}

struct WeakLifecycle {
    phase: WeakObservable<AppPhase>,
}

impl WeakLifecycle {
    fn upgrade(&self) -> Option<WindowLifecycle> {
        self.phase.upgrade().map(|phase| WindowLifecycle { phase })
    }
}
