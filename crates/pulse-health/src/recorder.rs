//! The probe cycle: measure, classify, persist, prune, summarize.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tracing::{debug, warn};

use pulse_history::{HealthRecord, ProbeStatus};

use crate::aggregate::{self, HealthSummary};
use crate::backend::ProbeStore;
use crate::config::RecorderConfig;
use crate::retention::RetentionPruner;

/// Runs one probe cycle per call and reports aggregate health.
///
/// Owns its store (dependency-injected at construction, no process-wide
/// state) and is shared behind `Arc` across concurrent requests; the
/// store's transactional discipline is the only cross-request
/// coordination. This is the only component that decides the externally
/// visible status.
pub struct HealthRecorder<S> {
    store: S,
    pruner: RetentionPruner,
    config: RecorderConfig,
    /// Record count from the last successful scan, reported when the
    /// store itself cannot be read.
    last_known_count: AtomicU64,
}

impl<S: ProbeStore> HealthRecorder<S> {
    pub fn new(store: S, config: RecorderConfig) -> Self {
        let pruner = RetentionPruner::new(config.retention_window);
        Self {
            store,
            pruner,
            config,
            last_known_count: AtomicU64::new(0),
        }
    }

    /// Execute a probe cycle and return the aggregate for the caller.
    ///
    /// Always returns a summary: storage failures downgrade the
    /// reported status instead of propagating, so the health endpoint
    /// can answer even when its own bookkeeping is broken.
    pub fn record_and_report(&self) -> HealthSummary {
        // Probe: a minimal round-trip against the storage medium.
        let started = Instant::now();
        let probe = self.store.ping();
        let elapsed = started.elapsed();

        let status = match probe {
            Ok(()) if elapsed > self.config.latency_threshold => ProbeStatus::Degraded,
            Ok(()) => ProbeStatus::Ok,
            Err(e) => {
                warn!(error = %e, "health probe failed");
                ProbeStatus::Failed
            }
        };

        let now = now_ms();
        let record = HealthRecord {
            timestamp_ms: now,
            status,
            latency_ms: elapsed.as_secs_f64() * 1000.0,
        };

        if let Err(e) = self.store.append(&record) {
            warn!(error = %e, "failed to persist probe record");
            return HealthSummary::storage_failed(self.last_known_count.load(Ordering::Relaxed));
        }

        // Housekeeping never fails the cycle that triggered it.
        match self.pruner.prune(&self.store, now) {
            Ok(deleted) if deleted > 0 => debug!(deleted, "pruned expired probe records"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "probe history prune failed"),
        }

        let cutoff = now.saturating_sub(self.config.retention_window.as_millis() as u64);
        match self.store.scan_since(cutoff) {
            Ok(records) => {
                let summary = aggregate::summarize(&records);
                self.last_known_count
                    .store(summary.record_count, Ordering::Relaxed);
                summary
            }
            Err(e) => {
                warn!(error = %e, "failed to scan probe history");
                HealthSummary::storage_failed(self.last_known_count.load(Ordering::Relaxed))
            }
        }
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
