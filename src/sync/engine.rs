//! Per-file sync engine
//!
//! ## Usage
//!
//! ```ignore
//! let engine = SyncEngine::new(config);
//! engine.copy_file(&path, &|event| println!("{}", event.to_json()));
//! ```

use std::path::{Path, PathBuf};

use crate::config::WatchConfig;
use crate::error::{ClonerError, ClonerResult};
use crate::fs::{FileSystem, LocalFs};
use crate::watcher::WatchEvent;

/// What a successful copy attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// File written to `target`
    Copied { target: PathBuf },
    /// Path rejected by the filter
    Skipped,
}

/// Coarse outcome of handling one file, used for counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Copied,
    Skipped,
    Failed,
}

/// Mirrors single files from the source tree into the target tree.
///
/// The engine is generic over `FS: FileSystem`, defaulting to `LocalFs`.
/// Use `new_with_fs()` to provide a custom filesystem (e.g., `MockFileSystem`).
pub struct SyncEngine<FS: FileSystem = LocalFs> {
    config: WatchConfig,
    fs: FS,
}

impl SyncEngine<LocalFs> {
    /// Create an engine writing to the local disk
    pub fn new(config: WatchConfig) -> Self {
        Self::new_with_fs(config, LocalFs::new())
    }
}

impl<FS: FileSystem> SyncEngine<FS> {
    /// Create an engine with a custom FileSystem
    pub fn new_with_fs(config: WatchConfig, fs: FS) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Map a source path to its location under the target directory.
    pub fn target_path_for(&self, path: &Path) -> ClonerResult<PathBuf> {
        let relative = path
            .strip_prefix(self.config.source())
            .map_err(|_| ClonerError::OutsideSource {
                path: path.to_path_buf(),
                root: self.config.source().to_path_buf(),
            })?;
        Ok(self.config.target().join(relative))
    }

    /// Whether the configured filter lets this path through.
    pub fn accepts(&self, path: &Path) -> bool {
        self.config
            .filter()
            .map_or(true, |filter| filter.matches(path))
    }

    /// Copy one file, returning errors instead of reporting them.
    pub fn try_copy(&self, path: &Path) -> ClonerResult<CopyOutcome> {
        if !self.accepts(path) {
            return Ok(CopyOutcome::Skipped);
        }

        let target = self.target_path_for(path)?;
        let copy_err = |source| ClonerError::Copy {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = target.parent() {
            self.fs.create_dir_all(parent).map_err(copy_err)?;
        }
        self.fs
            .copy_with_metadata(path, &target)
            .map_err(copy_err)?;

        Ok(CopyOutcome::Copied { target })
    }

    /// Copy one file and report what happened.
    ///
    /// Failures are reported as [`WatchEvent::Error`] and never propagate, so
    /// a single bad file cannot stop the initial sync or the watch loop.
    pub fn copy_file(&self, path: &Path, emit: &impl Fn(WatchEvent)) -> FileOutcome {
        match self.try_copy(path) {
            Ok(CopyOutcome::Copied { target }) => {
                emit(WatchEvent::Copied {
                    source: path.display().to_string(),
                    target: target.display().to_string(),
                });
                FileOutcome::Copied
            }
            Ok(CopyOutcome::Skipped) => {
                emit(WatchEvent::Skipped {
                    path: path.display().to_string(),
                });
                FileOutcome::Skipped
            }
            Err(err) => {
                emit(WatchEvent::error_for(path, &err));
                FileOutcome::Failed
            }
        }
    }

    /// Report an observed deletion. The target tree is left untouched.
    pub fn note_deleted(&self, path: &Path, emit: &impl Fn(WatchEvent)) {
        emit(WatchEvent::DeletionIgnored {
            path: path.display().to_string(),
        });
    }
}
