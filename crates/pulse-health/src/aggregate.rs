//! Aggregation of retained probe history into a current health summary.

use serde::Serialize;

use pulse_history::{HealthRecord, ProbeStatus};

/// Externally visible aggregate status.
///
/// Extends [`ProbeStatus`] with `Unknown` for the empty window: no
/// probe has ever succeeded, or the history was just pruned to empty.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AggregateStatus {
    Ok,
    Degraded,
    Failed,
    Unknown,
}

impl AggregateStatus {
    /// Stable lowercase name, used as a span attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateStatus::Ok => "ok",
            AggregateStatus::Degraded => "degraded",
            AggregateStatus::Failed => "failed",
            AggregateStatus::Unknown => "unknown",
        }
    }
}

impl From<ProbeStatus> for AggregateStatus {
    fn from(status: ProbeStatus) -> Self {
        match status {
            ProbeStatus::Ok => AggregateStatus::Ok,
            ProbeStatus::Degraded => AggregateStatus::Degraded,
            ProbeStatus::Failed => AggregateStatus::Failed,
        }
    }
}

impl std::fmt::Display for AggregateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate health derived from the retained window.
///
/// Recomputed on every probe cycle; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthSummary {
    pub current_status: AggregateStatus,
    pub record_count: u64,
    pub average_latency_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_retained_timestamp_ms: Option<u64>,
}

impl HealthSummary {
    /// Summary reported when the store itself cannot be read or
    /// written. `record_count` carries the last successfully scanned
    /// count so trend context survives a storage outage.
    pub(crate) fn storage_failed(last_known_count: u64) -> Self {
        Self {
            current_status: AggregateStatus::Failed,
            record_count: last_known_count,
            average_latency_ms: 0.0,
            oldest_retained_timestamp_ms: None,
        }
    }

    /// Mirror the summary fields onto a trace span as plain scalars.
    ///
    /// The span must have been created with empty `probe.status`,
    /// `probe.record_count`, and `probe.average_latency_ms` fields.
    pub fn record_span_attributes(&self, span: &tracing::Span) {
        span.record("probe.status", self.current_status.as_str());
        span.record("probe.record_count", self.record_count);
        span.record("probe.average_latency_ms", self.average_latency_ms);
    }
}

/// Summarize the retained window (oldest-first).
///
/// The most recent record is ground truth for liveness; the averaged
/// latency gives trend context. No smoothing, no weighting. Pure; the
/// only edge case is the empty window, reported as `Unknown`.
pub fn summarize(records: &[HealthRecord]) -> HealthSummary {
    let Some(last) = records.last() else {
        return HealthSummary {
            current_status: AggregateStatus::Unknown,
            record_count: 0,
            average_latency_ms: 0.0,
            oldest_retained_timestamp_ms: None,
        };
    };

    let total: f64 = records.iter().map(|r| r.latency_ms).sum();
    HealthSummary {
        current_status: last.status.into(),
        record_count: records.len() as u64,
        average_latency_ms: total / records.len() as f64,
        oldest_retained_timestamp_ms: records.first().map(|r| r.timestamp_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp_ms: u64, status: ProbeStatus, latency_ms: f64) -> HealthRecord {
        HealthRecord {
            timestamp_ms,
            status,
            latency_ms,
        }
    }

    #[test]
    fn empty_window_is_unknown() {
        let summary = summarize(&[]);
        assert_eq!(summary.current_status, AggregateStatus::Unknown);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.average_latency_ms, 0.0);
        assert_eq!(summary.oldest_retained_timestamp_ms, None);
    }

    #[test]
    fn most_recent_record_decides_status() {
        let records = [
            record(100, ProbeStatus::Ok, 10.0),
            record(200, ProbeStatus::Ok, 20.0),
            record(300, ProbeStatus::Failed, 30.0),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.current_status, AggregateStatus::Failed);
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.average_latency_ms, 20.0);
        assert_eq!(summary.oldest_retained_timestamp_ms, Some(100));
    }

    #[test]
    fn single_record_window() {
        let summary = summarize(&[record(500, ProbeStatus::Degraded, 400.0)]);
        assert_eq!(summary.current_status, AggregateStatus::Degraded);
        assert_eq!(summary.record_count, 1);
        assert_eq!(summary.average_latency_ms, 400.0);
        assert_eq!(summary.oldest_retained_timestamp_ms, Some(500));
    }

    #[test]
    fn recovery_after_failure_reports_ok() {
        let records = [
            record(100, ProbeStatus::Failed, 0.0),
            record(200, ProbeStatus::Ok, 4.0),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.current_status, AggregateStatus::Ok);
    }

    #[test]
    fn status_names_are_stable() {
        assert_eq!(AggregateStatus::Ok.as_str(), "ok");
        assert_eq!(AggregateStatus::Degraded.as_str(), "degraded");
        assert_eq!(AggregateStatus::Failed.as_str(), "failed");
        assert_eq!(AggregateStatus::Unknown.as_str(), "unknown");
    }
}
