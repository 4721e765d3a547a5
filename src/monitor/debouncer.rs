//! Alert debounce and suppression state machine
//!
//! Requires a run of consecutive failed probes before the first alert, and
//! caps how many alerts one incident may produce before going silent. The
//! failure counter resets on every threshold hit, so a prolonged outage
//! repeats the pattern: full failure streak, one alert attempt, budget check.

/// Outcome of feeding one probe result into the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Service is healthy; both counters were reset.
    Healthy,
    /// Unhealthy, but below the alert threshold. Counter carries over.
    Pending,
    /// Threshold hit with alert budget remaining: emit one alert.
    Alert {
        /// Consecutive failures observed when the alert fired.
        failures: u32,
    },
    /// Threshold hit but the incident's alert budget is exhausted.
    Suppressed,
}

/// Per-monitor alert debouncer. Pure state transitions, no I/O.
#[derive(Debug, Clone)]
pub struct Debouncer {
    failure_threshold: u32,
    max_alerts: u32,
    consecutive_failures: u32,
    alerts_sent: u32,
}

impl Debouncer {
    /// Create a new debouncer with both counters at zero.
    pub fn new(failure_threshold: u32, max_alerts: u32) -> Self {
        debug_assert!(failure_threshold > 0);
        Self {
            failure_threshold,
            max_alerts,
            consecutive_failures: 0,
            alerts_sent: 0,
        }
    }

    /// Feed one probe result and decide what the monitor should do.
    pub fn observe(&mut self, healthy: bool) -> Decision {
        if healthy {
            self.consecutive_failures = 0;
            self.alerts_sent = 0;
            return Decision::Healthy;
        }

        self.consecutive_failures += 1;
        if self.consecutive_failures < self.failure_threshold {
            return Decision::Pending;
        }

        // Threshold hit: the streak resets whether or not an alert goes out,
        // so the next alert requires another full run of failures.
        let failures = self.consecutive_failures;
        self.consecutive_failures = 0;

        if self.alerts_sent < self.max_alerts {
            self.alerts_sent += 1;
            Decision::Alert { failures }
        } else {
            Decision::Suppressed
        }
    }

    /// Current failure streak. Always below the threshold between calls.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Alerts emitted during the current incident.
    pub fn alerts_sent(&self) -> u32 {
        self.alerts_sent
    }
}
