//! redb table definitions for the probe history store.

use redb::TableDefinition;

/// Probe records keyed by `(timestamp_ms, seq)`; values are
/// JSON-serialized [`HealthRecord`](crate::types::HealthRecord)s.
/// redb orders tuple keys lexicographically, so a range scan from
/// `(cutoff, 0)` yields records oldest-first.
pub const RECORDS: TableDefinition<(u64, u64), &[u8]> = TableDefinition::new("records");
