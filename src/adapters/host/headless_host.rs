//! Headless host - Runs a preview without an editor.
//!
//! The "panel" is an HTML file that is rewritten on every update, and host
//! notifications go to the log.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::ports::{DocumentSource, PanelOptions, PreviewHost, PreviewPanel, ViewColumn};

/// Host exposing one document and writing panel content to a file.
pub struct HeadlessHost {
    document: Option<Arc<dyn DocumentSource>>,
    output: PathBuf,
}

impl HeadlessHost {
    pub fn new(document: Arc<dyn DocumentSource>, output: impl Into<PathBuf>) -> Self {
        Self {
            document: Some(document),
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl PreviewHost for HeadlessHost {
    fn active_document(&self) -> Option<Arc<dyn DocumentSource>> {
        self.document.clone()
    }

    fn create_panel(
        &self,
        title: &str,
        column: ViewColumn,
        options: PanelOptions,
    ) -> Arc<dyn PreviewPanel> {
        tracing::info!(
            title = %title,
            column = ?column,
            enable_scripts = options.enable_scripts,
            output = %self.output.display(),
            "Opening preview panel"
        );
        Arc::new(FilePanel {
            path: self.output.clone(),
        })
    }

    fn show_error_message(&self, text: &str) {
        tracing::error!("{}", text);
    }

    fn show_info_message(&self, text: &str) {
        tracing::info!("{}", text);
    }
}

/// Panel that mirrors its content into a file.
pub struct FilePanel {
    path: PathBuf,
}

impl PreviewPanel for FilePanel {
    fn set_html(&self, html: String) {
        match std::fs::write(&self.path, html) {
            Ok(()) => tracing::debug!("Wrote preview to {}", self.path.display()),
            Err(e) => tracing::error!("Failed to write {}: {}", self.path.display(), e),
        }
    }
}
