//! Domain types for the probe history store.

use serde::{Deserialize, Serialize};

/// Outcome of a single health probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// Probe round-trip succeeded under the latency threshold.
    Ok,
    /// Probe succeeded but took longer than the threshold.
    Degraded,
    /// Probe errored out.
    Failed,
}

/// A single persisted probe result.
///
/// Immutable once written; removed only by retention pruning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    /// Wall-clock time the record was written, in ms since the epoch.
    pub timestamp_ms: u64,
    pub status: ProbeStatus,
    /// Measured probe duration in milliseconds.
    pub latency_ms: f64,
}

/// Storage key of a persisted record: the write timestamp plus an
/// insertion counter that breaks ties within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordId {
    pub timestamp_ms: u64,
    pub seq: u64,
}
