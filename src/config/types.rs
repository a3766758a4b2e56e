//! Configuration type definitions

use std::path::{Path, PathBuf};

use crate::error::{ClonerError, ClonerResult};

use super::filter::PathFilter;

/// Validated watch configuration.
///
/// Built once by [`WatchConfig::new`] and never mutated afterwards. Both
/// directories are canonical absolute paths.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    source: PathBuf,
    target: PathBuf,
    recursive: bool,
    filter: Option<PathFilter>,
}

impl WatchConfig {
    /// Validate CLI inputs into a config.
    ///
    /// Fails if either directory is missing or not a directory, if the
    /// filter pattern does not compile, or if the target is a watched
    /// directory.
    pub fn new(
        source: &Path,
        target: &Path,
        recursive: bool,
        filter: Option<&str>,
    ) -> ClonerResult<Self> {
        let source = resolve_dir(source, |path| ClonerError::SourceNotFound { path })?;
        let target = resolve_dir(target, |path| ClonerError::TargetNotFound { path })?;
        let filter = filter.map(PathFilter::new).transpose()?;

        // Copies landing back in a watched directory would feed the watcher
        if source == target || (recursive && target.starts_with(&source)) {
            return Err(ClonerError::TargetInsideSource {
                watched: source,
                target,
            });
        }

        Ok(Self {
            source,
            target,
            recursive,
            filter,
        })
    }

    /// Directory being watched
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Directory receiving copies
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn filter(&self) -> Option<&PathFilter> {
        self.filter.as_ref()
    }
}

fn resolve_dir(
    path: &Path,
    not_found: impl FnOnce(PathBuf) -> ClonerError,
) -> ClonerResult<PathBuf> {
    if !path.exists() {
        return Err(not_found(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ClonerError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path.canonicalize()?)
}
