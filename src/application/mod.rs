//! Application layer - Orchestrates a preview session.
//!
//! - `PreviewSession` - Activation checks and the host event loop
//! - `PreviewController` - Debounced update cycles for one panel
//! - `PreviewPipeline` - parse -> validate -> render for one cycle
//! - `Renderer` - Theme adapter with an error boundary

mod preview_controller;
mod preview_pipeline;
mod preview_session;
mod renderer;

pub use preview_controller::{PreviewController, DEFAULT_DEBOUNCE};
pub use preview_pipeline::{schema_load_error_page, PreviewPipeline};
pub use preview_session::{PreviewSession, SessionSettings, SESSION_STARTED_MESSAGE};
pub use renderer::Renderer;
