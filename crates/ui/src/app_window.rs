//! Application window management
//!
//! Mounts the clock view against the Slint window and mirrors every render
//! into the window's text properties.

use std::rc::Rc;

use slint::{ComponentHandle, SharedString};
use timenow_application::{ApplicationError, ClockView, Subscription};
use timenow_domain::{ClockDisplay, ClockSettings};
use timenow_infrastructure::SystemClock;

use crate::MainWindow;
use crate::lifecycle::WindowLifecycle;
use crate::scheduler::SlintScheduler;

/// Errors raised while building the window.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The Slint platform could not create the window or run its loop.
    #[error("platform error: {0}")]
    Platform(#[from] slint::PlatformError),

    /// The clock view rejected its settings.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Application window wrapper with the mounted clock view.
pub struct AppWindow {
    window: MainWindow,
    _view: ClockView,
    _render: Subscription,
    _lifecycle: WindowLifecycle,
}

impl AppWindow {
    /// Creates the window and mounts the clock view.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created or the settings are
    /// invalid.
    pub fn new(settings: &ClockSettings) -> Result<Self, UiError> {
        let window = MainWindow::new()?;

        let lifecycle = WindowLifecycle::attach(&window);
        let view = ClockView::mount(
            settings,
            Rc::new(SystemClock::new()),
            &SlintScheduler,
            &lifecycle,
        )?;

        let ui_weak = window.as_weak();
        let render = view.on_render(move |display| {
            if let Some(ui) = ui_weak.upgrade() {
                apply_display(&ui, display);
            }
        });

        Ok(Self {
            window,
            _view: view,
            _render: render,
            _lifecycle: lifecycle,
        })
    }

    /// Runs the application event loop.
    ///
    /// This method blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        self.window.run()
    }

}

fn apply_display(ui: &MainWindow, display: &ClockDisplay) {
    ui.set_time_text(SharedString::from(display.time.as_str()));
    ui.set_date_text(SharedString::from(display.date.as_str()));
}
