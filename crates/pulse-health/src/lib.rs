//! pulse-health — the health probe cycle for Pulse.
//!
//! Each inbound health-check request drives one probe cycle: measure a
//! round-trip against the history store, persist the result, prune
//! expired history, and aggregate the retained window into a summary
//! for the HTTP caller and the active trace span.
//!
//! # Architecture
//!
//! ```text
//! HealthRecorder::record_and_report()
//!   ├── ProbeStore::ping()        → measured, classified into ProbeStatus
//!   ├── ProbeStore::append()      → new HealthRecord persisted
//!   ├── RetentionPruner::prune()  → best-effort, never fails the cycle
//!   └── aggregate::summarize()    → HealthSummary over a fresh scan
//! ```
//!
//! # Availability
//!
//! The recorder always answers. A broken store downgrades the reported
//! status to `Failed`; it never turns into a propagated error or a
//! panic. An empty retained window is `Unknown`, not a failure.

pub mod aggregate;
pub mod backend;
pub mod config;
pub mod recorder;
pub mod retention;

pub use aggregate::{AggregateStatus, HealthSummary};
pub use backend::ProbeStore;
pub use config::RecorderConfig;
pub use recorder::HealthRecorder;
pub use retention::RetentionPruner;
