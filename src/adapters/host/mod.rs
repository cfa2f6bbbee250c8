//! Host adapters.
//!
//! - `HeadlessHost` / `FileDocumentSource` - Preview a file without an editor
//! - `RecordingHost` / `InMemoryDocument` - Scriptable host for tests
//! - `host_event_stream` - Adapts an event channel to the stream a session consumes

mod file_document_source;
mod headless_host;
mod in_memory;

pub use file_document_source::{FileDocumentSource, DEFAULT_POLL_INTERVAL};
pub use headless_host::{FilePanel, HeadlessHost};
pub use in_memory::{InMemoryDocument, PanelRequest, RecordingHost, RecordingPanel};

use futures::stream::{self, Stream};
use tokio::sync::mpsc;

use crate::ports::HostEvent;

/// Turn the receiving half of a host event channel into a stream.
///
/// The stream ends when every sender is dropped.
pub fn host_event_stream(
    receiver: mpsc::UnboundedReceiver<HostEvent>,
) -> impl Stream<Item = HostEvent> {
    stream::unfold(receiver, |mut receiver| async move {
        receiver.recv().await.map(|event| (event, receiver))
    })
}
