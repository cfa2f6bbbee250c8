//! In-memory host implementation for testing.
//!
//! Provides a scriptable document and a host/panel pair that record every
//! call, so tests can assert on exactly what reached the editor.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{DocumentSource, PanelOptions, PreviewHost, PreviewPanel, ViewColumn};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Document whose text can be replaced by the test.
pub struct InMemoryDocument {
    uri: String,
    language_id: String,
    text: Mutex<String>,
}

impl InMemoryDocument {
    pub fn new(
        uri: impl Into<String>,
        language_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            language_id: language_id.into(),
            text: Mutex::new(text.into()),
        }
    }

    /// Creates a JSON document.
    pub fn json(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(uri, crate::domain::preview::JSON_LANGUAGE_ID, text)
    }

    /// Replaces the document text, as an edit would.
    pub fn set_text(&self, text: impl Into<String>) {
        *lock(&self.text) = text.into();
    }
}

impl DocumentSource for InMemoryDocument {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

/// Panel that records every HTML write.
#[derive(Default)]
pub struct RecordingPanel {
    writes: Mutex<Vec<String>>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All HTML written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }

    pub fn write_count(&self) -> usize {
        lock(&self.writes).len()
    }

    /// The HTML currently displayed.
    pub fn current_html(&self) -> Option<String> {
        lock(&self.writes).last().cloned()
    }
}

impl PreviewPanel for RecordingPanel {
    fn set_html(&self, html: String) {
        lock(&self.writes).push(html);
    }
}

/// A panel creation request seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    pub title: String,
    pub column: ViewColumn,
    pub options: PanelOptions,
}

/// Host that records notifications and hands out `RecordingPanel`s.
#[derive(Default)]
pub struct RecordingHost {
    active: Mutex<Option<Arc<dyn DocumentSource>>>,
    panels: Mutex<Vec<(PanelRequest, Arc<RecordingPanel>)>>,
    errors: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl RecordingHost {
    /// Host with no active editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose focused editor shows `document`.
    pub fn with_document(document: Arc<dyn DocumentSource>) -> Self {
        let host = Self::new();
        *lock(&host.active) = Some(document);
        host
    }

    pub fn panel_requests(&self) -> Vec<PanelRequest> {
        lock(&self.panels).iter().map(|(req, _)| req.clone()).collect()
    }

    /// The most recently created panel.
    pub fn last_panel(&self) -> Option<Arc<RecordingPanel>> {
        lock(&self.panels).last().map(|(_, panel)| Arc::clone(panel))
    }

    pub fn error_messages(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    pub fn info_messages(&self) -> Vec<String> {
        lock(&self.infos).clone()
    }
}

impl PreviewHost for RecordingHost {
    fn active_document(&self) -> Option<Arc<dyn DocumentSource>> {
        lock(&self.active).clone()
    }

    fn create_panel(
        &self,
        title: &str,
        column: ViewColumn,
        options: PanelOptions,
    ) -> Arc<dyn PreviewPanel> {
        let panel = Arc::new(RecordingPanel::new());
        let request = PanelRequest {
            title: title.to_string(),
            column,
            options,
        };
        lock(&self.panels).push((request, Arc::clone(&panel)));
        panel
    }

    fn show_error_message(&self, text: &str) {
        lock(&self.errors).push(text.to_string());
    }

    fn show_info_message(&self, text: &str) {
        lock(&self.infos).push(text.to_string());
    }
}
