//! Health probes for monitored services
//!
//! A probe answers "is the service healthy right now?" with a single boolean.
//! Probe errors are folded into the unhealthy answer, never propagated.

pub mod http;
pub mod process;

pub use http::HttpProbe;
pub use process::ProcessProbe;

use async_trait::async_trait;

/// One health evaluation of a monitored service.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe the service once. Must not block beyond a bounded timeout.
    async fn probe(&self) -> bool;
}
