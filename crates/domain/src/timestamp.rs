//! The instant shown on screen.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike};

use crate::meridiem::Meridiem;

/// The single point in time driving the display.
///
/// Stored as a local wall-clock time together with its UTC offset, so the
/// hour, date and ordering are all answered without consulting the host
/// time zone again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrentTimestamp(DateTime<FixedOffset>);

impl CurrentTimestamp {
    /// Wraps an instant.
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Builds a timestamp from any zoned date-time.
    #[must_use]
    pub fn from_zoned<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.fixed_offset())
    }

    /// Returns the underlying instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Hour of day in local time, 0 through 23.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// AM/PM indicator derived from the hour.
    #[must_use]
    pub fn meridiem(&self) -> Meridiem {
        Meridiem::from_hour(self.hour())
    }
}

impl From<DateTime<FixedOffset>> for CurrentTimestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }
}

impl From<DateTime<Local>> for CurrentTimestamp {
    fn from(instant: DateTime<Local>) -> Self {
        Self::from_zoned(&instant)
    }
}
