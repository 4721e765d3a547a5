//! Environment-sourced monitor configuration

use std::time::Duration;

/// Consecutive failed probes required before an alert is considered.
pub const FAILURE_THRESHOLD: u32 = 2;

/// Maximum alerts delivered per incident before silent suppression.
pub const MAX_ALERTS_PER_INCIDENT: u32 = 3;

/// Timeout applied to the HTTP probe client.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Monitor configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Slack bot token used for alert delivery
    pub slack_token: String,
    /// Bearer token for the API ping endpoint
    pub api_token: String,
    /// Display name attached to alert messages
    pub bot_username: String,
    /// Channel receiving alerts
    pub slack_channel: String,
    /// API health endpoint to probe
    pub ping_url: String,
    /// Process-name fragment identifying the worker
    pub worker_process_name: String,
    /// Delay between consecutive checks
    pub check_interval: Duration,
}

impl MonitorConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require =
            |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        Ok(Self {
            slack_token: require("SLACK_APP_AUTH_TOKEN")?,
            api_token: require("API_SERVER_AUTH_TOKEN")?,
            bot_username: require("BOT_USERNAME")?,
            slack_channel: require("SLACK_CHANNEL")?,
            ping_url: lookup("PING_URL")
                .unwrap_or_else(|| "http://localhost:8000/ping".to_string()),
            worker_process_name: lookup("WORKER_PROCESS_NAME")
                .unwrap_or_else(|| "quantum_worker".to_string()),
            check_interval: lookup("CHECK_INTERVAL_SECS")
                .and_then(|s| s.parse().ok())
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(120)),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("SLACK_APP_AUTH_TOKEN", "xoxb-test"),
            ("API_SERVER_AUTH_TOKEN", "api-test"),
            ("BOT_USERNAME", "watchtower"),
            ("SLACK_CHANNEL", "#alerts"),
        ])
    }

    fn lookup<'a>(
        vars: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let vars = base_vars();
        let config = MonitorConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.ping_url, "http://localhost:8000/ping");
        assert_eq!(config.worker_process_name, "quantum_worker");
        assert_eq!(config.check_interval, Duration::from_secs(120));
        assert_eq!(config.slack_channel, "#alerts");
    }

    #[test]
    fn test_overrides() {
        let mut vars = base_vars();
        vars.insert("PING_URL", "http://localhost:9999/ping");
        vars.insert("WORKER_PROCESS_NAME", "batch_worker");
        vars.insert("CHECK_INTERVAL_SECS", "15");

        let config = MonitorConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.ping_url, "http://localhost:9999/ping");
        assert_eq!(config.worker_process_name, "batch_worker");
        assert_eq!(config.check_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_missing_required_var() {
        let mut vars = base_vars();
        vars.remove("SLACK_CHANNEL");

        let err = MonitorConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SLACK_CHANNEL")));
    }

    #[test]
    fn test_zero_interval_falls_back() {
        let mut vars = base_vars();
        vars.insert("CHECK_INTERVAL_SECS", "0");

        // A zero interval would turn the monitor loop into a busy spin.
        let config = MonitorConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.check_interval, Duration::from_secs(120));
    }

    #[test]
    fn test_unparseable_interval_falls_back() {
        let mut vars = base_vars();
        vars.insert("CHECK_INTERVAL_SECS", "not-a-number");

        let config = MonitorConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.check_interval, Duration::from_secs(120));
    }
}
