//! Repeating timers on the Slint event loop.

use std::rc::Rc;
use std::time::Duration;

use slint::{Timer, TimerMode};
use timenow_application::{Scheduler, TaskHandle};

/// [`Scheduler`] backed by [`slint::Timer`].
///
/// Callbacks run on the UI thread between frames. Cancelling the returned
/// handle stops and drops the timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlintScheduler;

impl Scheduler for SlintScheduler {
    fn schedule_repeating(&self, interval: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        start_repeating(interval, task).1
    }
}

/// Starts a repeating timer owned by the returned handle.
fn start_repeating(interval: Duration, mut task: Box<dyn FnMut()>) -> (Rc<Timer>, TaskHandle) {
    let timer = Rc::new(Timer::default());
    timer.start(TimerMode::Repeated, interval, move || task());
    let owned = Rc::clone(&timer);
    let handle = TaskHandle::new(move || owned.stop());
    (timer, handle)
}
