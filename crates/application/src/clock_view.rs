//! Clock view component
//!
//! Holds the [`CurrentTimestamp`], keeps it fresh with the configured
//! [`RefreshMode`] and renders it into a [`ClockDisplay`].
//!
//! The refresh source is acquired in [`ClockView::mount`] and released in
//! [`ClockView::unmount`]. Dropping the view releases it too, so no refresh
//! can touch state once the view is gone.

use std::cell::Cell;
use std::rc::Rc;

use timenow_domain::{ClockDisplay, ClockSettings, CurrentTimestamp, DisplayFormat, RefreshMode};

use crate::error::ApplicationResult;
use crate::observable::{Observable, Subscription};
use crate::ports::{AppPhase, Clock, LifecycleEvents, Scheduler};
use crate::task::TaskHandle;

/// A mounted clock view.
pub struct ClockView {
    state: Observable<CurrentTimestamp>,
    clock: Rc<dyn Clock>,
    format: DisplayFormat,
    mode: RefreshMode,
    refresh: Option<TaskHandle>,
}

impl ClockView {
    /// Mounts the view: captures the current instant and starts refreshing.
    ///
    /// Only the port matching `settings.refresh_mode` is used; the other is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn mount(
        settings: &ClockSettings,
        clock: Rc<dyn Clock>,
        scheduler: &dyn Scheduler,
        lifecycle: &dyn LifecycleEvents,
    ) -> ApplicationResult<Self> {
        settings.validate()?;

        let state = Observable::new(CurrentTimestamp::from(clock.now()));
        let live = Rc::new(Cell::new(true));
        let tick = refresher(&state, &clock, &live);
        let mut source = match settings.refresh_mode {
            RefreshMode::Interval => {
                scheduler.schedule_repeating(settings.refresh_interval, Box::new(tick))
            }
            RefreshMode::OnForeground => lifecycle.on_phase_change(Box::new(move |phase| {
                if phase == AppPhase::Active {
                    tick();
                }
            })),
        };
        // Callbacks already queued by the host check `live`, so nothing
        // mutates state after release even if the host fires late.
        let refresh = TaskHandle::new(move || {
            live.set(false);
            source.cancel();
        });

        tracing::debug!(
            mode = ?settings.refresh_mode,
            interval = ?settings.refresh_interval,
            "clock view mounted"
        );

        Ok(Self {
            state,
            clock,
            format: DisplayFormat::default(),
            mode: settings.refresh_mode,
            refresh: Some(refresh),
        })
    }

    /// Overwrites the timestamp with the clock's current instant.
    ///
    /// Does nothing once the view is unmounted.
    pub fn refresh(&self) {
        if self.is_mounted() {
            self.state.set(CurrentTimestamp::from(self.clock.now()));
        }
    }

    /// Renders the stored timestamp.
    #[must_use]
    pub fn render(&self) -> ClockDisplay {
        self.state.with(|ts| self.format.render(ts))
    }

    /// Returns the stored timestamp.
    #[must_use]
    pub fn timestamp(&self) -> CurrentTimestamp {
        self.state.get()
    }

    /// Refresh strategy chosen at mount.
    #[must_use]
    pub const fn refresh_mode(&self) -> RefreshMode {
        self.mode
    }

    /// Calls `renderer` with the current display now and after every refresh.
    pub fn on_render(&self, renderer: impl Fn(&ClockDisplay) + 'static) -> Subscription {
        renderer(&self.render());
        let format = self.format;
        self.state.subscribe(move |ts| renderer(&format.render(ts)))
    }

    /// Returns true until [`unmount`](Self::unmount) is called.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.refresh.as_ref().is_some_and(TaskHandle::is_active)
    }

    /// Stops refreshing. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mut refresh) = self.refresh.take() {
            refresh.cancel();
            tracing::debug!("clock view unmounted");
        }
    }
}

impl Drop for ClockView {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Builds the tick callback. It holds only a weak reference to the state and
/// is a no-op once `live` is cleared or the view is dropped.
fn refresher(
    state: &Observable<CurrentTimestamp>,
    clock: &Rc<dyn Clock>,
    live: &Rc<Cell<bool>>,
) -> impl Fn() + 'static {
    let state = state.downgrade();
    let clock = Rc::clone(clock);
    let live = Rc::clone(live);
    move || {
        if !live.get() {
            return;
        }
        if let Some(state) = state.upgrade() {
            let now = CurrentTimestamp::from(clock.now());
            state.set(now);
            tracing::trace!(now = %now.instant(), "clock refreshed");
        }
    }
}
