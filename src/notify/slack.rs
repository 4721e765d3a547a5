//! Slack notifier posting through chat.postMessage

use async_trait::async_trait;
use serde::Deserialize;

use super::{AlertSink, NotifyError};

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Posts alert messages to a single Slack channel as a named bot.
pub struct SlackNotifier {
    client: reqwest::Client,
    token: String,
    channel: String,
    username: String,
    api_url: String,
}

/// Relevant subset of the chat.postMessage response body.
#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackNotifier {
    pub fn new(
        token: impl Into<String>,
        channel: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            channel: channel.into(),
            username: username.into(),
            api_url: POST_MESSAGE_URL.to_string(),
        }
    }

    /// Override the Slack API endpoint.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[async_trait]
impl AlertSink for SlackNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let payload = serde_json::json!({
            "channel": self.channel,
            "text": text,
            "username": self.username,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status().as_u16()));
        }

        // Slack reports API-level failures with HTTP 200 and "ok": false.
        let body: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        if !body.ok {
            return Err(NotifyError::Api(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        tracing::debug!(channel = %self.channel, "Alert delivered");
        Ok(())
    }
}
