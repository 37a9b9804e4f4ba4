//! Display formatting
//!
//! Turns a [`CurrentTimestamp`] into the two lines shown by the clock view.
//! Formatting is a pure function of the timestamp and the chosen styles, so
//! rendering the same timestamp twice always yields the same strings. The
//! clock view renders with [`DisplayFormat::default`].

use crate::timestamp::CurrentTimestamp;

/// How hours are written in the time line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourCycle {
    /// 1 through 12, e.g. `9:05`, `1:30`.
    #[default]
    H12,
    /// 00 through 23, e.g. `09:05`, `13:30`.
    H23,
}

impl HourCycle {
    const fn pattern(self, show_seconds: bool) -> &'static str {
        match (self, show_seconds) {
            (Self::H12, false) => "%-I:%M",
            (Self::H12, true) => "%-I:%M:%S",
            (Self::H23, false) => "%H:%M",
            (Self::H23, true) => "%H:%M:%S",
        }
    }
}

/// How the date line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `2/9/25`
    Short,
    /// `Feb 9, 2025`
    #[default]
    Medium,
    /// `February 9, 2025`
    Long,
    /// `Sunday, February 9, 2025`
    Full,
}

impl DateStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%-m/%-d/%y",
            Self::Medium => "%b %-d, %Y",
            Self::Long => "%B %-d, %Y",
            Self::Full => "%A, %B %-d, %Y",
        }
    }
}

/// Rendered output of the clock view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockDisplay {
    /// Time followed by a space and the AM/PM indicator.
    pub time: String,
    /// Formatted date.
    pub date: String,
}

/// Formatting choices for the two display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFormat {
    /// Hour cycle for the time line.
    pub hour_cycle: HourCycle,
    /// Style of the date line.
    pub date_style: DateStyle,
    /// Whether the time line includes seconds.
    pub show_seconds: bool,
}

impl DisplayFormat {
    /// Creates a format from its parts.
    #[must_use]
    pub const fn new(hour_cycle: HourCycle, date_style: DateStyle, show_seconds: bool) -> Self {
        Self {
            hour_cycle,
            date_style,
            show_seconds,
        }
    }

    /// Formats the time line, e.g. `9:05 AM`.
    ///
    /// The indicator is appended in both hour cycles.
    #[must_use]
    pub fn format_time(&self, timestamp: &CurrentTimestamp) -> String {
        let time = timestamp
            .instant()
            .format(self.hour_cycle.pattern(self.show_seconds));
        format!("{time} {}", timestamp.meridiem())
    }

    /// Formats the date line, e.g. `Feb 9, 2025`.
    #[must_use]
    pub fn format_date(&self, timestamp: &CurrentTimestamp) -> String {
        timestamp
            .instant()
            .format(self.date_style.pattern())
            .to_string()
    }

    /// Renders both lines.
    #[must_use]
    pub fn render(&self, timestamp: &CurrentTimestamp) -> ClockDisplay {
        ClockDisplay {
            time: self.format_time(timestamp),
            date: self.format_date(timestamp),
        }
    }
}
