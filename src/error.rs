//! Error types for filecloner
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for filecloner operations
pub type ClonerResult<T> = Result<T, ClonerError>;

/// Main error type for filecloner operations
#[derive(Error, Debug)]
pub enum ClonerError {
    /// Source directory missing
    #[error("source folder '{path}' does not exist")]
    SourceNotFound { path: PathBuf },

    /// Target directory missing
    #[error("target folder '{path}' does not exist")]
    TargetNotFound { path: PathBuf },

    /// Path exists but is a file (or something else)
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Filter pattern failed to compile
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Target would receive its own copies back as source events
    #[error("target folder '{target}' is inside watched folder '{watched}'")]
    TargetInsideSource { watched: PathBuf, target: PathBuf },

    /// Path handed to the engine does not live under the source directory
    #[error("path '{path}' is outside source folder '{root}'")]
    OutsideSource { path: PathBuf, root: PathBuf },

    /// Copy of a single file failed
    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed for one entry
    #[error("failed to walk source folder: {message}")]
    Walk { message: String },

    /// Notification backend failure
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClonerError {
    /// Path the error is about, when there is one
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ClonerError::SourceNotFound { path }
            | ClonerError::TargetNotFound { path }
            | ClonerError::NotADirectory { path }
            | ClonerError::OutsideSource { path, .. }
            | ClonerError::Copy { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<ignore::Error> for ClonerError {
    fn from(err: ignore::Error) -> Self {
        ClonerError::Walk {
            message: err.to_string(),
        }
    }
}
