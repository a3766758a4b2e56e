//! Routes changes to the sync engine

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::fs::{FileSystem, LocalFs};
use crate::sync::{source_files, FileOutcome, SyncEngine, SyncSummary};

use super::event::{ChangeEvent, ChangeKind, WatchEvent};

/// Turns [`ChangeEvent`]s into copy or ignore decisions.
pub struct Dispatcher<FS: FileSystem = LocalFs> {
    engine: SyncEngine<FS>,
}

impl<FS: FileSystem> Dispatcher<FS> {
    pub fn new(engine: SyncEngine<FS>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SyncEngine<FS> {
        &self.engine
    }

    /// Handle one change synchronously.
    ///
    /// Returns `None` for directory events and deletions. A directory that
    /// appears in a recursive watch has its files copied here, since some of
    /// them may predate the watch on that directory.
    pub fn dispatch(
        &self,
        change: &ChangeEvent,
        emit: &impl Fn(WatchEvent),
    ) -> Option<FileOutcome> {
        if change.is_directory {
            if change.kind == ChangeKind::Created && self.engine.config().recursive() {
                self.copy_tree(&change.path, true, || true, emit);
            }
            return None;
        }

        match change.kind {
            ChangeKind::Created | ChangeKind::Modified => {
                Some(self.engine.copy_file(&change.path, emit))
            }
            ChangeKind::Deleted => {
                self.engine.note_deleted(&change.path, emit);
                None
            }
        }
    }

    /// Copy every file currently in the source tree.
    ///
    /// Stops early once `running` is cleared.
    pub fn initial_sync(&self, running: &AtomicBool, emit: &impl Fn(WatchEvent)) -> SyncSummary {
        emit(WatchEvent::InitialSyncStarted);

        let config = self.engine.config();
        let summary = self.copy_tree(
            config.source(),
            config.recursive(),
            || running.load(Ordering::SeqCst),
            emit,
        );

        emit(WatchEvent::InitialSyncComplete {
            copied: summary.copied,
            skipped: summary.skipped,
            errors: summary.errors,
        });
        summary
    }

    fn copy_tree(
        &self,
        root: &Path,
        recursive: bool,
        keep_going: impl Fn() -> bool,
        emit: &impl Fn(WatchEvent),
    ) -> SyncSummary {
        let mut summary = SyncSummary::new();

        for entry in source_files(root, recursive) {
            if !keep_going() {
                break;
            }
            match entry {
                Ok(path) => summary.record(self.engine.copy_file(&path, emit)),
                Err(err) => {
                    emit(WatchEvent::error(err));
                    summary.record(FileOutcome::Failed);
                }
            }
        }

        summary
    }
}
