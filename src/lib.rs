//! filecloner - watch a folder and mirror it into another
//!
//! filecloner copies every file of a source folder into a target folder on
//! startup, then keeps the target up to date by re-copying files as they are
//! created or modified. Deletions are reported but never mirrored.

pub mod config;
pub mod error;
pub mod fs;
pub mod sync;
pub mod watcher;

// Re-exports for convenience
pub use config::{PathFilter, WatchConfig};
pub use error::{ClonerError, ClonerResult};
pub use fs::{FileSystem, LocalFs};
pub use sync::{CopyOutcome, FileOutcome, SyncEngine, SyncSummary};
pub use watcher::{ChangeEvent, ChangeKind, Dispatcher, WatchEvent, WatchUseCase};
