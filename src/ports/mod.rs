//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the preview core and the outside world. Adapters implement these ports.
//!
//! ## Host Ports
//!
//! - `PreviewHost` - Active document lookup, panel creation, notifications
//! - `PreviewPanel` - A panel showing HTML
//! - `DocumentSource` - The document being previewed
//! - `HostEvent` - Text change / panel close notifications
//!
//! ## Pipeline Ports
//!
//! - `SchemaLoader` - Fetches and compiles the resume schema
//! - `ResumeTheme` - Renders a validated resume

mod document_source;
mod preview_host;
mod resume_theme;
mod schema_loader;

pub use document_source::{DocumentSource, HostEvent};
pub use preview_host::{PanelOptions, PreviewHost, PreviewPanel, ViewColumn};
pub use resume_theme::{ResumeTheme, ThemeError};
pub use schema_loader::SchemaLoader;
