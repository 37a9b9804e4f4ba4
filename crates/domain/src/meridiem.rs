//! AM/PM indicator.

use std::fmt;

/// Half of the day an hour falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    /// Hours 0 through 11.
    Am,
    /// Hours 12 through 23.
    Pm,
}

impl Meridiem {
    /// Classifies an hour of day (0-23).
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour < 12 { Self::Am } else { Self::Pm }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
