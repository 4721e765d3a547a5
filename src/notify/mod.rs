//! Alert delivery

pub mod slack;

pub use slack::SlackNotifier;

use async_trait::async_trait;

/// Delivery channel for alert messages.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one formatted alert. Not retried on failure.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Alert delivery errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to reach Slack: {0}")]
    Transport(String),

    #[error("Slack returned status {0}")]
    Status(u16),

    #[error("Slack API error: {0}")]
    Api(String),
}
