//! HistoryStore — redb-backed persistence for health probe records.
//!
//! Supports append, range scan from a cutoff, and bulk deletion before
//! a cutoff. Each mutation runs in its own write transaction, so a
//! record is either fully visible to subsequent scans or not visible at
//! all. Readers get an MVCC snapshot and never see a partial prune.
//! The store supports both on-disk and in-memory backends (the latter
//! for testing).

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata};
use tracing::debug;

use crate::error::{HistoryError, HistoryResult};
use crate::tables::RECORDS;
use crate::types::{HealthRecord, RecordId};

/// Convert any `Display` error into a `HistoryError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| HistoryError::$variant(e.to_string())
    };
}

/// Thread-safe probe history store backed by redb.
#[derive(Clone)]
pub struct HistoryStore {
    db: Arc<Database>,
    /// Insertion counter; breaks key ties between records written in
    /// the same millisecond.
    seq: Arc<AtomicU64>,
}

impl HistoryStore {
    /// Open (or create) a persistent history store at the given path.
    pub fn open(path: &Path) -> HistoryResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self::from_db(db)?;
        debug!(?path, "probe history store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory history store (for testing).
    pub fn open_in_memory() -> HistoryResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self::from_db(db)?;
        debug!("in-memory probe history store opened");
        Ok(store)
    }

    fn from_db(db: Database) -> HistoryResult<Self> {
        let store = Self {
            db: Arc::new(db),
            seq: Arc::new(AtomicU64::new(0)),
        };
        let next_seq = store.ensure_table()?;
        store.seq.store(next_seq, Ordering::SeqCst);
        Ok(store)
    }

    /// Create the records table if absent and recover the insertion
    /// counter from the newest persisted key, so ordering stays
    /// monotonic across reopen.
    fn ensure_table(&self) -> HistoryResult<u64> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let next_seq;
        {
            // Opening a table in a write transaction creates it if absent.
            let table = txn.open_table(RECORDS).map_err(map_err!(Table))?;
            next_seq = match table.last().map_err(map_err!(Read))? {
                Some((key, _)) => key.value().1 + 1,
                None => 0,
            };
        }
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(next_seq)
    }

    /// Minimal read round-trip against the storage medium.
    ///
    /// Used as the probe operation by the health recorder: it exercises
    /// transaction setup and table access without touching any record.
    pub fn ping(&self) -> HistoryResult<()> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(RECORDS).map_err(map_err!(Table))?;
        table.len().map_err(map_err!(Read))?;
        Ok(())
    }

    /// Append a new probe record. Atomic: either fully visible to
    /// subsequent scans or not visible at all.
    pub fn append(&self, record: &HealthRecord) -> HistoryResult<RecordId> {
        let id = RecordId {
            timestamp_ms: record.timestamp_ms,
            seq: self.seq.fetch_add(1, Ordering::SeqCst),
        };
        let value = serde_json::to_vec(record).map_err(map_err!(Serialize))?;
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut table = txn.open_table(RECORDS).map_err(map_err!(Table))?;
            table
                .insert((id.timestamp_ms, id.seq), value.as_slice())
                .map_err(map_err!(Write))?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(timestamp_ms = id.timestamp_ms, seq = id.seq, "probe record appended");
        Ok(id)
    }

    /// All retained records with `timestamp_ms >= cutoff_ms`,
    /// oldest-first. A snapshot at call time, not a live cursor.
    pub fn scan_since(&self, cutoff_ms: u64) -> HistoryResult<Vec<HealthRecord>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(RECORDS).map_err(map_err!(Table))?;
        let mut results = Vec::new();
        for entry in table.range((cutoff_ms, 0u64)..).map_err(map_err!(Read))? {
            let (_, value) = entry.map_err(map_err!(Read))?;
            let record: HealthRecord =
                serde_json::from_slice(value.value()).map_err(map_err!(Deserialize))?;
            results.push(record);
        }
        Ok(results)
    }

    /// Delete all records with `timestamp_ms < cutoff_ms` in a single
    /// write transaction. Returns the number deleted; idempotent.
    pub fn delete_before(&self, cutoff_ms: u64) -> HistoryResult<u64> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let count;
        {
            let mut table = txn.open_table(RECORDS).map_err(map_err!(Table))?;
            // Collect keys first; the range iterator borrows the table.
            let keys: Vec<(u64, u64)> = table
                .range(..(cutoff_ms, 0u64))
                .map_err(map_err!(Read))?
                .filter_map(|entry| {
                    let (key, _) = entry.ok()?;
                    Some(key.value())
                })
                .collect();
            count = keys.len() as u64;
            for key in keys {
                table.remove(key).map_err(map_err!(Write))?;
            }
        }
        txn.commit().map_err(map_err!(Transaction))?;
        if count > 0 {
            debug!(count, cutoff_ms, "expired probe records deleted");
        }
        Ok(count)
    }
}
