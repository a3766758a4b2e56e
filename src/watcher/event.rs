//! Watch event types

use std::path::{Path, PathBuf};

use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::EventKind;

use crate::error::ClonerError;

/// Interval between checks of the running flag while waiting for events
pub const POLL_INTERVAL_MS: u64 = 50;

/// Kind of filesystem change, as far as mirroring is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Deleted,
}

/// A single change to one path in the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, path: PathBuf, is_directory: bool) -> Self {
        Self {
            kind,
            path,
            is_directory,
        }
    }

    /// A file found by the initial walk
    pub fn created(path: PathBuf) -> Self {
        let is_directory = path.is_dir();
        Self::new(ChangeKind::Created, path, is_directory)
    }

    /// Translate one `notify` event into zero or more changes.
    ///
    /// Renames become a deletion of the old name and a creation of the new
    /// one. Access and unclassified events produce nothing.
    pub fn from_notify(event: &notify::Event) -> Vec<ChangeEvent> {
        let present = |kind: ChangeKind, path: &Path, folder: bool| {
            ChangeEvent::new(kind, path.to_path_buf(), folder || path.is_dir())
        };
        let gone = |path: &Path, folder: bool| {
            ChangeEvent::new(ChangeKind::Deleted, path.to_path_buf(), folder)
        };

        match event.kind {
            EventKind::Create(kind) => event
                .paths
                .iter()
                .map(|p| present(ChangeKind::Created, p, kind == CreateKind::Folder))
                .collect(),
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                event.paths.iter().map(|p| gone(p, false)).collect()
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => event
                .paths
                .iter()
                .map(|p| present(ChangeKind::Created, p, false))
                .collect(),
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
                let mut changes = Vec::with_capacity(event.paths.len());
                if let Some((from, to)) = event.paths.split_first() {
                    changes.push(gone(from, false));
                    changes.extend(to.iter().map(|p| present(ChangeKind::Created, p, false)));
                }
                changes
            }
            // Backends that cannot tell which side of a rename a path is on
            EventKind::Modify(ModifyKind::Name(_)) => event
                .paths
                .iter()
                .map(|p| {
                    if p.exists() {
                        present(ChangeKind::Created, p, false)
                    } else {
                        gone(p, false)
                    }
                })
                .collect(),
            EventKind::Modify(_) => event
                .paths
                .iter()
                .map(|p| present(ChangeKind::Modified, p, false))
                .collect(),
            EventKind::Remove(kind) => event
                .paths
                .iter()
                .map(|p| gone(p, kind == RemoveKind::Folder))
                .collect(),
            EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
        }
    }
}

/// Watch event types for console and NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
        target: String,
        recursive: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        filter: Option<String>,
    },
    InitialSyncStarted,
    InitialSyncComplete {
        copied: usize,
        skipped: usize,
        errors: usize,
    },
    Copied {
        source: String,
        target: String,
    },
    Skipped {
        path: String,
    },
    DeletionIgnored {
        path: String,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Error event for a file that failed to mirror
    pub fn error_for(path: &Path, err: &ClonerError) -> Self {
        WatchEvent::Error {
            path: Some(path.display().to_string()),
            message: err.to_string(),
        }
    }

    /// Error event with no single path attached
    pub fn error(err: impl std::fmt::Display) -> Self {
        WatchEvent::Error {
            path: None,
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error { .. })
    }
}
