//! Worker process liveness probe

use async_trait::async_trait;
use sysinfo::{ProcessesToUpdate, System};

use super::Probe;

/// Scans the OS process table for a process whose name contains a fragment.
pub struct ProcessProbe {
    name_fragment: String,
}

impl ProcessProbe {
    pub fn new(name_fragment: impl Into<String>) -> Self {
        Self {
            name_fragment: name_fragment.into(),
        }
    }

    /// Substring match over a set of process names.
    fn scan<I, S>(names: I, fragment: &str) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().any(|name| name.as_ref().contains(fragment))
    }
}

#[async_trait]
impl Probe for ProcessProbe {
    async fn probe(&self) -> bool {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let names = sys
            .processes()
            .values()
            .map(|p| p.name().to_string_lossy().into_owned());
        let found = Self::scan(names, &self.name_fragment);

        if found {
            tracing::debug!(fragment = %self.name_fragment, "Worker process found");
        } else {
            tracing::warn!(fragment = %self.name_fragment, "Worker process not found");
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_matches_substring() {
        let names = ["systemd", "quantum_worker", "sshd"];
        assert!(ProcessProbe::scan(names, "quantum_worker"));
        assert!(ProcessProbe::scan(names, "worker"));
    }

    #[test]
    fn test_scan_no_match() {
        let names = ["systemd", "sshd"];
        assert!(!ProcessProbe::scan(names, "quantum_worker"));
    }

    #[test]
    fn test_scan_empty_process_list() {
        let names: [&str; 0] = [];
        assert!(!ProcessProbe::scan(names, "quantum_worker"));
    }

    #[tokio::test]
    async fn test_probe_absent_process_is_unhealthy() {
        let probe = ProcessProbe::new("no-such-process-name-watchtower-test");
        assert!(!probe.probe().await);
    }
}
