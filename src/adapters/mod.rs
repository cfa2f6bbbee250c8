//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the preview core to external systems:
//! - `host` - Editor hosts (headless file preview, in-memory recording host)
//! - `schema` - Schema loaders (HTTP, static)
//! - `theme` - Resume themes

pub mod host;
pub mod schema;
pub mod theme;

pub use host::{
    host_event_stream, FileDocumentSource, FilePanel, HeadlessHost, InMemoryDocument,
    RecordingHost, RecordingPanel,
};
pub use schema::{HttpSchemaLoader, StaticSchemaLoader};
pub use theme::BasicTheme;
