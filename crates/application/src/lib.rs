//! TimeNow Application - Clock view and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the system clock, timers and window lifecycle)
//! - The observable state cell and cancellable task handles
//! - The clock view component

pub mod clock_view;
pub mod error;
pub mod observable;
pub mod ports;
pub mod task;

pub use clock_view::ClockView;
pub use error::{ApplicationError, ApplicationResult};
pub use observable::{Observable, Subscription, WeakObservable};
pub use ports::{AppPhase, Clock, LifecycleEvents, Scheduler};
pub use task::TaskHandle;
