//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::WatchConfig;
use crate::error::ClonerResult;
use crate::fs::{FileSystem, LocalFs};
use crate::sync::{SyncEngine, SyncSummary};

use super::dispatch::Dispatcher;
use super::event::{ChangeEvent, WatchEvent, POLL_INTERVAL_MS};

/// Watch Use Case
///
/// Runs the initial sync, then mirrors live changes until the running flag
/// is cleared. This is the main entry point for the `filecloner` binary.
pub struct WatchUseCase<FS: FileSystem = LocalFs> {
    dispatcher: Dispatcher<FS>,
}

impl WatchUseCase<LocalFs> {
    pub fn new(config: WatchConfig) -> Self {
        Self::new_with_fs(config, LocalFs::new())
    }
}

impl<FS: FileSystem> WatchUseCase<FS> {
    pub fn new_with_fs(config: WatchConfig, fs: FS) -> Self {
        Self {
            dispatcher: Dispatcher::new(SyncEngine::new_with_fs(config, fs)),
        }
    }

    fn config(&self) -> &WatchConfig {
        self.dispatcher.engine().config()
    }

    /// Start watching (blocking)
    ///
    /// Returns once `running` is false. Only watcher registration can fail;
    /// per-file problems are reported through `on_event`.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> ClonerResult<SyncSummary>
    where
        F: Fn(WatchEvent),
    {
        let config = self.config();
        on_event(WatchEvent::WatchStarted {
            source: config.source().display().to_string(),
            target: config.target().display().to_string(),
            recursive: config.recursive(),
            filter: config.filter().map(|f| f.as_str().to_string()),
        });

        // Register before the initial walk so changes made during it are queued
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        let mode = if config.recursive() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher.watch(config.source(), mode)?;

        let summary = self.dispatcher.initial_sync(&running, &on_event);

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
                Ok(Ok(event)) => {
                    for change in ChangeEvent::from_notify(&event) {
                        self.dispatcher.dispatch(&change, &on_event);
                    }
                }
                Ok(Err(err)) => on_event(WatchEvent::error(err)),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        drop(watcher);
        on_event(WatchEvent::Shutdown);
        Ok(summary)
    }
}
