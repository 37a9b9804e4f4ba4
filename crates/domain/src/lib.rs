//! TimeNow Domain - Core clock types
//!
//! This crate defines the domain model for the TimeNow clock.
//! All types here are pure Rust with no I/O dependencies.

pub mod display;
pub mod error;
pub mod meridiem;
pub mod settings;
pub mod timestamp;

pub use display::{ClockDisplay, DateStyle, DisplayFormat, HourCycle};
pub use error::{DomainError, DomainResult};
pub use meridiem::Meridiem;
pub use settings::{ClockSettings, MAX_REFRESH_INTERVAL, REFRESH_INTERVAL, RefreshMode};
pub use timestamp::CurrentTimestamp;
