//! Watchtower daemon
//!
//! Run with: cargo run
//!
//! Environment variables (a .env file in the working directory is honored):
//! - SLACK_APP_AUTH_TOKEN: Slack bot token (required)
//! - API_SERVER_AUTH_TOKEN: Bearer token for the API ping endpoint (required)
//! - BOT_USERNAME: Display name on alert messages (required)
//! - SLACK_CHANNEL: Channel receiving alerts (required)
//! - PING_URL: API health endpoint (default: http://localhost:8000/ping)
//! - WORKER_PROCESS_NAME: Process-name fragment identifying the worker (default: quantum_worker)
//! - CHECK_INTERVAL_SECS: Seconds between checks (default: 120)
//! - RUST_LOG: Log level (default: info)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchtower::config::{
    MonitorConfig, FAILURE_THRESHOLD, MAX_ALERTS_PER_INCIDENT, PROBE_TIMEOUT,
};
use watchtower::monitor::{Debouncer, Monitor};
use watchtower::notify::SlackNotifier;
use watchtower::probe::{HttpProbe, ProcessProbe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchtower=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MonitorConfig::from_env()?;

    tracing::info!("Watchtower configuration:");
    tracing::info!("  Ping URL: {}", config.ping_url);
    tracing::info!("  Worker process: {}", config.worker_process_name);
    tracing::info!(
        "  Check interval: {} seconds",
        config.check_interval.as_secs()
    );
    tracing::info!("  Slack channel: {}", config.slack_channel);
    tracing::info!("  Failure threshold: {}", FAILURE_THRESHOLD);
    tracing::info!("  Alerts per incident: {}", MAX_ALERTS_PER_INCIDENT);

    let api_monitor = Monitor::new(
        "API SERVER",
        HttpProbe::new(&config.ping_url, &config.api_token, PROBE_TIMEOUT),
        SlackNotifier::new(
            &config.slack_token,
            &config.slack_channel,
            &config.bot_username,
        ),
        Debouncer::new(FAILURE_THRESHOLD, MAX_ALERTS_PER_INCIDENT),
        config.check_interval,
    );

    let worker_monitor = Monitor::new(
        "WORKER SERVER",
        ProcessProbe::new(&config.worker_process_name),
        SlackNotifier::new(
            &config.slack_token,
            &config.slack_channel,
            &config.bot_username,
        ),
        Debouncer::new(FAILURE_THRESHOLD, MAX_ALERTS_PER_INCIDENT),
        config.check_interval,
    );

    let api_handle = api_monitor.start();
    let worker_handle = worker_monitor.start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    api_handle.stop().await;
    worker_handle.stop().await;

    Ok(())
}
