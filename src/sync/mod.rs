//! Sync engine for mirroring source files into the target tree
//!
//! Implements:
//! - Source → target path mapping
//! - Filter checks (regex search on the full source path)
//! - Copy with metadata, creating intermediate directories
//! - Log-only handling of deletions
//! - Source tree walk for the initial sync

mod engine;
mod walk;

pub use engine::{CopyOutcome, FileOutcome, SyncEngine};
pub use walk::source_files;

/// Result of the initial full-tree sync
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Files copied into the target
    pub copied: usize,
    /// Files rejected by the filter
    pub skipped: usize,
    /// Files (or walk entries) that failed
    pub errors: usize,
}

impl SyncSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one handled file
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Copied => self.copied += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed => self.errors += 1,
        }
    }

    /// Check if sync was successful (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}
