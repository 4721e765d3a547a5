//! Watchtower: Service Liveness Monitor
//!
//! Periodically probes an HTTP health endpoint and scans the OS process table
//! for a worker process, posting a debounced, rate-limited Slack alert when
//! either stays unhealthy for consecutive checks.
//!
//! # Features
//!
//! - **Debounced Alerting**: consecutive failed probes required before the first alert
//! - **Alert Budget**: a capped number of alerts per incident, then silent suppression
//! - **Independent Monitors**: one task per monitored service, no shared state
//! - **Pluggable Probes**: HTTP ping and process-table scan behind one trait
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use watchtower::monitor::{Debouncer, Monitor};
//! use watchtower::notify::SlackNotifier;
//! use watchtower::probe::HttpProbe;
//!
//! # async fn demo() {
//! let monitor = Monitor::new(
//!     "API SERVER",
//!     HttpProbe::new("http://localhost:8000/ping", "token", Duration::from_secs(30)),
//!     SlackNotifier::new("xoxb-token", "#alerts", "watchtower"),
//!     Debouncer::new(2, 3),
//!     Duration::from_secs(120),
//! );
//!
//! let handle = monitor.start();
//! // ... later
//! handle.stop().await;
//! # }
//! ```

pub mod config;
pub mod monitor;
pub mod notify;
pub mod probe;

// Re-export commonly used types
pub use config::{ConfigError, MonitorConfig};
pub use monitor::{Debouncer, Decision, Monitor, MonitorHandle};
pub use notify::{AlertSink, NotifyError, SlackNotifier};
pub use probe::{HttpProbe, Probe, ProcessProbe};
