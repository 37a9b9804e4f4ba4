//! TimeNow UI - User interface layer
//!
//! This crate provides the Slint-based window for the TimeNow clock, plus
//! the Slint-backed scheduler and lifecycle adapters it mounts the view with.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

mod app_window;
pub mod lifecycle;
pub mod scheduler;

pub use app_window::{AppWindow, UiError};
pub use lifecycle::WindowLifecycle;
pub use scheduler::SlintScheduler;

// Include the generated Slint code
slint::include_modules!();
