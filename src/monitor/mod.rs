//! Monitoring loop and alert debouncing
//!
//! Ties a probe, the debounce state machine and an alert sink together into
//! one periodically-ticking task per monitored service.

pub mod debouncer;
pub mod runner;

pub use debouncer::{Debouncer, Decision};
pub use runner::{Monitor, MonitorHandle};
