//! Durable storage for the feed's two JSON documents.
//!
//! The snapshot document is rebuilt wholesale each run; the history log
//! is loaded at the start of a run and written back once at the end.
//! An unreadable or malformed history file degrades to an empty log
//! rather than failing the run.

pub mod store;

pub use store::{HistoryStore, SnapshotStore, StoreError};
