//! Clock, timers and the host-facing services
//!
//! The clock and timer queue are part of the core. Everything else talks
//! to the real terminal or filesystem and needs the `runtime` feature.

#[cfg(feature = "runtime")]
pub mod log_dirs;
#[cfg(feature = "runtime")]
pub mod terminal_modes;
pub mod time_source;
pub mod timer_queue;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
