//! Scheduler port for recurring work on the UI thread.

use std::time::Duration;

use crate::task::TaskHandle;

/// Port for running a callback repeatedly.
///
/// Implementations invoke `task` on the thread that owns the view, once per
/// `interval`, until the returned handle is cancelled or dropped. No call may
/// start after cancellation.
pub trait Scheduler {
    /// Starts a repeating task.
    fn schedule_repeating(&self, interval: Duration, task: Box<dyn FnMut()>) -> TaskHandle;
}
