//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the clock view and the host: the
//! system clock, the timer facility and the window lifecycle. Adapters live
//! in the infrastructure and UI crates.

mod clock;
mod lifecycle;
mod scheduler;

pub use clock::Clock;
pub use lifecycle::{AppPhase, LifecycleEvents};
pub use scheduler::Scheduler;
