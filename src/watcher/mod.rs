//! File watcher for continuous mirroring
//!
//! Implements the watch loop with:
//! - Initial full sync before live events are handled
//! - One synchronous copy per create/modify notification
//! - Log-only deletions
//! - Graceful Ctrl+C shutdown
//! - NDJSON output for CI

mod dispatch;
mod event;
mod use_case;

pub use dispatch::Dispatcher;
pub use event::{ChangeEvent, ChangeKind, WatchEvent, POLL_INTERVAL_MS};
pub use use_case::WatchUseCase;
