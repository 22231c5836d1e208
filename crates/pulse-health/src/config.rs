//! Recorder configuration.

use std::time::Duration;

/// Tuning knobs for the health recorder.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// How long probe history is retained.
    pub retention_window: Duration,
    /// Probe round-trips slower than this are classified `Degraded`.
    pub latency_threshold: Duration,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            retention_window: Duration::from_secs(24 * 60 * 60),
            latency_threshold: Duration::from_millis(250),
        }
    }
}
