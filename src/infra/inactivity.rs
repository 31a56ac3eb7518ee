//! Usage: Configuration endpoint of the inactivity monitor.
//!
//! The monitor itself — idle detection and the audio mute — runs outside
//! this crate; it polls the threshold cell configured here. The cell is the
//! monitor's own copy of the timeout and is authoritative for enforcement,
//! which is why a save only counts as successful once the value landed here.

use crate::screen::bridge::InactivityPort;
use crate::screen::DEFAULT_TIMEOUT_MINUTES;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug)]
pub(crate) struct InactivityState {
    threshold_secs: AtomicU64,
}

impl Default for InactivityState {
    fn default() -> Self {
        Self {
            threshold_secs: AtomicU64::new(u64::from(DEFAULT_TIMEOUT_MINUTES) * 60),
        }
    }
}

impl InactivityState {
    pub(crate) fn current_threshold(&self) -> Duration {
        Duration::from_secs(self.threshold_secs.load(Ordering::Relaxed).max(1))
    }
}

impl InactivityPort for InactivityState {
    /// Points the monitor at a new threshold. Zero is rejected: the monitor
    /// would treat it as always-elapsed and mute immediately.
    fn set_timeout(&self, minutes: u32) -> Result<(), String> {
        if minutes == 0 {
            return Err("inactivity timeout must be greater than zero".to_string());
        }

        let secs = u64::from(minutes) * 60;
        self.threshold_secs.store(secs, Ordering::Relaxed);
        tracing::debug!(threshold_secs = secs, "inactivity threshold updated");

        Ok(())
    }
}
