//! PreviewHost port - The editor capabilities a preview session uses.
//!
//! Mirrors what an editor plugin host offers: look up the active document,
//! open a panel, and show notifications.

use std::sync::Arc;

use super::DocumentSource;

/// Editor column a panel opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewColumn {
    Active,
    #[default]
    One,
    Two,
    Three,
}

/// Options passed when creating a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelOptions {
    /// Allow scripts in the panel content. Previews never need them.
    pub enable_scripts: bool,
}

/// A panel displaying HTML.
pub trait PreviewPanel: Send + Sync {
    /// Replace the panel content.
    fn set_html(&self, html: String);
}

/// Port for the editor host.
pub trait PreviewHost: Send + Sync {
    /// Document in the focused editor, if any.
    fn active_document(&self) -> Option<Arc<dyn DocumentSource>>;

    /// Open a new panel.
    fn create_panel(
        &self,
        title: &str,
        column: ViewColumn,
        options: PanelOptions,
    ) -> Arc<dyn PreviewPanel>;

    /// Show an error notification.
    fn show_error_message(&self, text: &str);

    /// Show an informational notification.
    fn show_info_message(&self, text: &str);
}
