//! Clock port for time-related operations

use chrono::{DateTime, FixedOffset};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a mock implementation.
pub trait Clock {
    /// Returns the current local time together with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}
