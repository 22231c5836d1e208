//! Storage seam for the probe cycle.

use pulse_history::{HealthRecord, HistoryResult, HistoryStore, RecordId};

/// Storage operations the recorder needs from its backing store.
///
/// [`HistoryStore`] is the production implementation; tests substitute
/// failure-injecting doubles. All methods are short, local operations —
/// no network round-trips.
pub trait ProbeStore: Send + Sync {
    /// Minimal read round-trip against the storage medium; this is the
    /// operation the recorder times and classifies.
    fn ping(&self) -> HistoryResult<()>;

    /// Persist a new record atomically.
    fn append(&self, record: &HealthRecord) -> HistoryResult<RecordId>;

    /// Snapshot of all retained records with `timestamp_ms >= cutoff_ms`,
    /// oldest-first.
    fn scan_since(&self, cutoff_ms: u64) -> HistoryResult<Vec<HealthRecord>>;

    /// Remove all records with `timestamp_ms < cutoff_ms`; idempotent.
    fn delete_before(&self, cutoff_ms: u64) -> HistoryResult<u64>;
}

impl ProbeStore for HistoryStore {
    fn ping(&self) -> HistoryResult<()> {
        HistoryStore::ping(self)
    }

    fn append(&self, record: &HealthRecord) -> HistoryResult<RecordId> {
        HistoryStore::append(self, record)
    }

    fn scan_since(&self, cutoff_ms: u64) -> HistoryResult<Vec<HealthRecord>> {
        HistoryStore::scan_since(self, cutoff_ms)
    }

    fn delete_before(&self, cutoff_ms: u64) -> HistoryResult<u64> {
        HistoryStore::delete_before(self, cutoff_ms)
    }
}
