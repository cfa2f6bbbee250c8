//! DocumentSource port - The editor document being previewed.
//!
//! The host owns the real document; the preview only ever needs its
//! identity, its language and its current text. Change and close
//! notifications arrive separately as `HostEvent`s so the controller can be
//! driven by any editor or by a headless harness.

/// Port for reading the document under preview.
///
/// # Contract
///
/// - `uri` is stable for the lifetime of the document instance
/// - `text` returns the full current content, re-read on every call
///
/// # Example
///
/// ```ignore
/// let doc: Arc<dyn DocumentSource> = host.active_document()?;
/// if doc.language_id() == JSON_LANGUAGE_ID {
///     let value = parse_document(&doc.text())?;
/// }
/// ```
pub trait DocumentSource: Send + Sync {
    /// Identity of the document instance.
    fn uri(&self) -> &str;

    /// Language the editor assigns to the document (e.g. `"json"`).
    fn language_id(&self) -> &str;

    /// Full current text.
    fn text(&self) -> String;
}

/// Notifications the host delivers to a running preview session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The text of the document at `uri` changed.
    TextChanged { uri: String },
    /// The preview panel was closed.
    PanelDisposed,
}

impl HostEvent {
    pub fn text_changed(uri: impl Into<String>) -> Self {
        HostEvent::TextChanged { uri: uri.into() }
    }
}
