//! File watching for automatic rebuilds.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// File contents or metadata changed
    Modified(PathBuf),
}

impl WatchEvent {
    /// Path the event refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Deleted(path) | Self::Modified(path) => path,
        }
    }
}

/// File watcher for detecting changes under a set of directories.
///
/// Events are dropped once the watcher goes out of scope.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Paths that do not exist are skipped. Returns the watcher and a
    /// channel to receive events.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
                tracing::debug!("Watching {}", path.display());
            } else {
                tracing::debug!("Not watching missing {}", path.display());
            }
        }

        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;

            while let Ok(event) = sync_rx.recv() {
                let now = Instant::now();
                if last_event_time.is_some_and(|last| now.duration_since(last) < DEBOUNCE) {
                    continue;
                }

                let mut forwarded = false;
                for path in &event.paths {
                    if let Some(e) = classify_event(path, &event.kind) {
                        forwarded = true;
                        if async_tx.blocking_send(e).is_err() {
                            return;
                        }
                    }
                }

                if forwarded {
                    last_event_time = Some(now);
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let path = path.to_path_buf();

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path)),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path)),
        EventKind::Modify(_) => Some(WatchEvent::Modified(path)),
        _ => None,
    }
}

/// Run `rebuild` for every event until the channel closes.
///
/// Each call is a full rebuild; a failing rebuild is logged and the loop
/// keeps going.
pub async fn rebuild_on_change<F, E>(mut rx: async_mpsc::Receiver<WatchEvent>, mut rebuild: F)
where
    F: FnMut() -> Result<(), E>,
    E: std::fmt::Display,
{
    while let Some(event) = rx.recv().await {
        tracing::info!("Change detected: {}", event.path().display());

        if let Err(e) = rebuild() {
            tracing::error!("Rebuild failed: {}", e);
        }
    }
}
