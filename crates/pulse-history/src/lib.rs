//! pulse-history — embedded probe-history store for Pulse.
//!
//! Backed by [redb](https://docs.rs/redb), keeps an append-and-prune log
//! of health probe results. Not a general time-series store: the only
//! access patterns are append, range scan from a cutoff, and bulk
//! deletion of everything older than a cutoff.
//!
//! # Architecture
//!
//! Records are JSON-serialized into redb's `&[u8]` value column, keyed
//! by `(timestamp_ms, seq)` so that same-millisecond writes keep their
//! insertion order. redb provides MVCC snapshots for readers and a
//! single serialized writer, so a concurrent scan never observes a
//! half-completed append or prune.
//!
//! The `HistoryStore` is `Clone` + `Send` + `Sync` (backed by
//! `Arc<Database>`) and can be shared across async tasks.

pub mod error;
pub mod store;
pub mod tables;
pub mod types;

pub use error::{HistoryError, HistoryResult};
pub use store::HistoryStore;
pub use types::{HealthRecord, ProbeStatus, RecordId};
