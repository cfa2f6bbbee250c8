//! File Document Source - A document backed by a file on disk.
//!
//! Lets the preview run without an editor: the file is re-read on every
//! update cycle and a polling watcher turns content changes into
//! `HostEvent::TextChanged` notifications.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::ports::{DocumentSource, HostEvent};

/// Default interval between file polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Document source reading a file.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
    uri: String,
    language_id: String,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let uri = format!("file://{}", path.display());
        let language_id = language_for(&path);
        Self {
            path,
            uri,
            language_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Poll the file and report content changes.
    ///
    /// The watcher stops when the receiving side of `events` is dropped,
    /// which is how a disposed session unsubscribes.
    pub fn watch(
        &self,
        interval: Duration,
        events: mpsc::UnboundedSender<HostEvent>,
    ) -> JoinHandle<()> {
        let path = self.path.clone();
        let uri = self.uri.clone();

        tokio::spawn(async move {
            let mut last = tokio::fs::read_to_string(&path).await.ok();
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if events.is_closed() {
                    break;
                }

                let current = tokio::fs::read_to_string(&path).await.ok();
                if current == last {
                    continue;
                }
                last = current;

                tracing::debug!(uri = %uri, "File changed on disk");
                if events.send(HostEvent::text_changed(uri.as_str())).is_err() {
                    break;
                }
            }
        })
    }
}

impl DocumentSource for FileDocumentSource {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn text(&self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                String::new()
            }
        }
    }
}

/// Map a file extension to an editor language identifier.
fn language_for(path: &Path) -> String {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
    {
        Some(ext) if ext == "json" => "json".to_string(),
        Some(ext) if ext == "jsonc" => "jsonc".to_string(),
        Some(ext) if ext == "yml" || ext == "yaml" => "yaml".to_string(),
        Some(ext) if ext == "md" => "markdown".to_string(),
        Some(ext) => ext,
        None => "plaintext".to_string(),
    }
}
