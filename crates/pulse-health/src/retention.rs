//! Retention pruning of probe history.

use std::time::Duration;

use pulse_history::HistoryResult;

use crate::backend::ProbeStore;

/// Deletes records older than the retention window.
///
/// Runs opportunistically after each successful append rather than on a
/// timer, so history growth is bounded by write frequency instead of
/// wall-clock drift. A failed prune is the caller's problem to log and
/// swallow; the next probe cycle retries naturally.
#[derive(Debug, Clone)]
pub struct RetentionPruner {
    window: Duration,
}

impl RetentionPruner {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Delete everything older than `now_ms - window`. Returns the
    /// number of records removed.
    pub fn prune<S: ProbeStore + ?Sized>(&self, store: &S, now_ms: u64) -> HistoryResult<u64> {
        let cutoff = now_ms.saturating_sub(self.window.as_millis() as u64);
        store.delete_before(cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_history::{HealthRecord, HistoryStore, ProbeStatus};

    fn record(timestamp_ms: u64) -> HealthRecord {
        HealthRecord {
            timestamp_ms,
            status: ProbeStatus::Ok,
            latency_ms: 1.0,
        }
    }

    #[test]
    fn prune_retains_exactly_the_window_suffix() {
        let store = HistoryStore::open_in_memory().unwrap();
        // Records spanning well past a 1-second window.
        for ts in [1_000, 2_000, 5_000, 9_200, 9_800, 10_000] {
            store.append(&record(ts)).unwrap();
        }

        let pruner = RetentionPruner::new(Duration::from_secs(1));
        let deleted = pruner.prune(&store, 10_000).unwrap();
        assert_eq!(deleted, 3);

        let retained: Vec<u64> = store
            .scan_since(0)
            .unwrap()
            .iter()
            .map(|r| r.timestamp_ms)
            .collect();
        // Exactly the suffix with timestamp >= now - window.
        assert_eq!(retained, vec![9_200, 9_800, 10_000]);
    }

    #[test]
    fn prune_twice_deletes_nothing_more() {
        let store = HistoryStore::open_in_memory().unwrap();
        store.append(&record(1_000)).unwrap();
        store.append(&record(10_000)).unwrap();

        let pruner = RetentionPruner::new(Duration::from_secs(5));
        assert_eq!(pruner.prune(&store, 10_000).unwrap(), 1);
        assert_eq!(pruner.prune(&store, 10_000).unwrap(), 0);
    }

    #[test]
    fn prune_can_empty_the_store() {
        let store = HistoryStore::open_in_memory().unwrap();
        store.append(&record(1_000)).unwrap();

        let pruner = RetentionPruner::new(Duration::from_millis(100));
        assert_eq!(pruner.prune(&store, 60_000).unwrap(), 1);
        assert!(store.scan_since(0).unwrap().is_empty());
    }

    #[test]
    fn window_wider_than_now_keeps_everything() {
        let store = HistoryStore::open_in_memory().unwrap();
        store.append(&record(100)).unwrap();

        // now - window saturates to zero.
        let pruner = RetentionPruner::new(Duration::from_secs(3600));
        assert_eq!(pruner.prune(&store, 1_000).unwrap(), 0);
        assert_eq!(store.scan_since(0).unwrap().len(), 1);
    }
}
