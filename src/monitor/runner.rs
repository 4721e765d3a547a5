//! Generic monitor loop

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use super::debouncer::{Debouncer, Decision};
use crate::notify::AlertSink;
use crate::probe::Probe;

/// One monitored service: a probe, a debouncer and an alert sink, checked on
/// a fixed interval in its own task.
pub struct Monitor<P, S> {
    label: String,
    probe: P,
    sink: S,
    debouncer: Debouncer,
    check_interval: Duration,
}

/// Handle to a running monitor task.
pub struct MonitorHandle {
    shutdown_tx: mpsc::Sender<()>,
    join: tokio::task::JoinHandle<()>,
}

impl MonitorHandle {
    /// Signal the monitor loop to stop and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.join.await;
    }
}

impl<P, S> Monitor<P, S>
where
    P: Probe + 'static,
    S: AlertSink + 'static,
{
    /// Create a new monitor for one service.
    pub fn new(
        label: impl Into<String>,
        probe: P,
        sink: S,
        debouncer: Debouncer,
        check_interval: Duration,
    ) -> Self {
        Self {
            label: label.into(),
            probe,
            sink,
            debouncer,
            check_interval,
        }
    }

    /// Spawn the monitor loop. The first check runs immediately; every later
    /// check follows a full interval of sleep after the previous one
    /// finished, however long it took.
    pub fn start(self) -> MonitorHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        let join = tokio::spawn(self.run(shutdown_rx));
        MonitorHandle { shutdown_tx, join }
    }

    async fn run(mut self, mut shutdown_rx: mpsc::Receiver<()>) {
        tracing::info!(
            monitor = %self.label,
            interval = ?self.check_interval,
            "Monitor started"
        );

        loop {
            self.check_once().await;

            tokio::select! {
                _ = sleep(self.check_interval) => {}
                _ = shutdown_rx.recv() => {
                    tracing::info!(monitor = %self.label, "Monitor shutting down");
                    break;
                }
            }
        }
    }

    async fn check_once(&mut self) {
        let healthy = self.probe.probe().await;

        match self.debouncer.observe(healthy) {
            Decision::Healthy => {
                tracing::debug!(monitor = %self.label, "Service is up and running");
            }
            Decision::Pending => {
                tracing::warn!(
                    monitor = %self.label,
                    failures = self.debouncer.consecutive_failures(),
                    "Health check failed, retrying"
                );
            }
            Decision::Alert { failures } => {
                let message = format!(
                    "*Health check for {} FAILED. Attempts: {}*",
                    self.label, failures
                );
                tracing::warn!(monitor = %self.label, "Sending alert");

                // Fire-and-forget: a failed delivery is logged and dropped,
                // it does not count toward the failure streak.
                if let Err(e) = self.sink.send(&message).await {
                    tracing::error!(
                        monitor = %self.label,
                        error = %e,
                        "Failed to deliver alert"
                    );
                }
            }
            Decision::Suppressed => {
                tracing::warn!(
                    monitor = %self.label,
                    "Alert budget exhausted, suppressing alert"
                );
            }
        }
    }
}
