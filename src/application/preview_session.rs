//! PreviewSession - Activation and the host event loop.
//!
//! `start` performs the activation checks, opens the panel and loads the
//! schema; `run` then feeds host notifications to the controller until the
//! panel is closed.

use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use tracing::{info, warn};

use crate::config::{AppConfig, DEFAULT_PANEL_TITLE, DEFAULT_SCHEMA_URL};
use crate::domain::foundation::PreviewError;
use crate::domain::preview::{PreviewStatus, JSON_LANGUAGE_ID};
use crate::ports::{
    HostEvent, PanelOptions, PreviewHost, ResumeTheme, SchemaLoader, ViewColumn,
};

use super::{PreviewController, PreviewPipeline, Renderer, DEFAULT_DEBOUNCE};

/// Notification shown when a session starts.
pub const SESSION_STARTED_MESSAGE: &str = "JSON Resume preview started";

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub schema_url: String,
    pub debounce: Duration,
    pub panel_title: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            schema_url: DEFAULT_SCHEMA_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            panel_title: DEFAULT_PANEL_TITLE.to_string(),
        }
    }
}

impl From<&AppConfig> for SessionSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            schema_url: config.schema.url.clone(),
            debounce: config.preview.debounce(),
            panel_title: config.preview.panel_title.clone(),
        }
    }
}

/// A running preview: one document, one panel, one validator.
pub struct PreviewSession {
    controller: PreviewController,
}

impl PreviewSession {
    /// Activate a preview for the host's active document.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveDocument` or `UnsupportedFileType` after showing
    /// the error through the host; no panel is created in either case.
    /// A schema load failure is not an error here: the session starts,
    /// shows the failure in its panel and stays inert.
    pub async fn start(
        host: &dyn PreviewHost,
        loader: &dyn SchemaLoader,
        theme: Arc<dyn ResumeTheme>,
        settings: &SessionSettings,
    ) -> Result<Self, PreviewError> {
        let document = match host.active_document() {
            Some(document) => document,
            None => return Err(reject(host, PreviewError::NoActiveDocument)),
        };

        if document.language_id() != JSON_LANGUAGE_ID {
            return Err(reject(
                host,
                PreviewError::UnsupportedFileType {
                    language_id: document.language_id().to_string(),
                },
            ));
        }

        host.show_info_message(SESSION_STARTED_MESSAGE);
        let panel = host.create_panel(
            &settings.panel_title,
            ViewColumn::One,
            PanelOptions {
                enable_scripts: false,
            },
        );

        let pipeline = PreviewPipeline::new(Renderer::new(theme));
        let controller = PreviewController::new(document, panel, pipeline, settings.debounce);

        info!(
            session_id = %controller.session_id(),
            uri = %controller.document_uri(),
            theme = %controller.theme_name(),
            "Preview session started"
        );

        controller.initialize(loader, &settings.schema_url).await;

        Ok(Self { controller })
    }

    pub fn controller(&self) -> &PreviewController {
        &self.controller
    }

    pub fn status(&self) -> PreviewStatus {
        self.controller.status()
    }

    /// Deliver host events until the panel is closed.
    ///
    /// The session is disposed when `PanelDisposed` arrives or when the
    /// event stream ends. Dropping the stream on return is the
    /// unsubscription from text changes.
    pub async fn run<S>(&self, events: S)
    where
        S: Stream<Item = HostEvent>,
    {
        tokio::pin!(events);

        while let Some(event) = events.next().await {
            match event {
                HostEvent::TextChanged { uri } => self.controller.on_text_changed(&uri),
                HostEvent::PanelDisposed => break,
            }
        }

        self.controller.on_panel_disposed();
    }
}

fn reject(host: &dyn PreviewHost, err: PreviewError) -> PreviewError {
    warn!(code = %err.code(), "Cannot start preview: {}", err);
    host.show_error_message(&err.to_string());
    err
}
