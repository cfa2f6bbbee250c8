//! PreviewController - Keeps one panel in sync with one document.
//!
//! Owns the compiled validator for the session and the debounce timer.
//! Every update cycle runs to completion under the state lock, so cycles
//! never interleave with each other or with disposal.
//!
//! ## Debouncing
//!
//! Each text change cancels the pending timer (if any) and schedules a new
//! one after the quiet period. A generation counter guards against a timer
//! that already fired but has not yet taken the lock: if its generation is
//! stale, or the session was disposed, it does nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::foundation::{PreviewSessionId, StateMachine};
use crate::domain::preview::{CompiledValidator, PreviewStatus, RenderOutput};
use crate::ports::{DocumentSource, PreviewPanel, SchemaLoader};

use super::preview_pipeline::schema_load_error_page;
use super::PreviewPipeline;

/// Quiet period between the last edit and the update it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Handle to a preview controller. Cheap to clone.
#[derive(Clone)]
pub struct PreviewController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    session_id: PreviewSessionId,
    document: Arc<dyn DocumentSource>,
    panel: Arc<dyn PreviewPanel>,
    pipeline: PreviewPipeline,
    debounce: Duration,
    state: Mutex<ControllerState>,
}

#[derive(Default)]
struct ControllerState {
    status: PreviewStatus,
    validator: Option<CompiledValidator>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
    cycles: u64,
}

impl ControllerState {
    fn transition(&mut self, target: PreviewStatus) -> bool {
        match self.status.transition_to(target) {
            Ok(next) => {
                self.status = next;
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.generation += 1;
    }
}

impl PreviewController {
    pub fn new(
        document: Arc<dyn DocumentSource>,
        panel: Arc<dyn PreviewPanel>,
        pipeline: PreviewPipeline,
        debounce: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                session_id: PreviewSessionId::new(),
                document,
                panel,
                pipeline,
                debounce,
                state: Mutex::new(ControllerState::default()),
            }),
        }
    }

    pub fn session_id(&self) -> PreviewSessionId {
        self.inner.session_id
    }

    pub fn document_uri(&self) -> &str {
        self.inner.document.uri()
    }

    pub fn theme_name(&self) -> &str {
        self.inner.pipeline.renderer().theme_name()
    }

    pub fn status(&self) -> PreviewStatus {
        self.inner.lock_state().status
    }

    /// Number of update cycles that wrote to the panel.
    pub fn cycle_count(&self) -> u64 {
        self.inner.lock_state().cycles
    }

    /// Returns true while a debounced update is scheduled.
    pub fn has_pending_update(&self) -> bool {
        self.inner.lock_state().pending.is_some()
    }

    /// Load the schema and run the first update cycle.
    ///
    /// On failure the load error is shown in the panel and the session
    /// stays in `LoadFailed`, accepting no further updates.
    pub(crate) async fn initialize(&self, loader: &dyn SchemaLoader, schema_url: &str) {
        let started = self
            .inner
            .lock_state()
            .transition(PreviewStatus::SchemaLoading);
        if !started {
            return;
        }

        let loaded = loader.load(schema_url).await;

        let mut state = self.inner.lock_state();
        if state.status.is_disposed() {
            debug!(session_id = %self.inner.session_id, "Disposed while loading schema");
            return;
        }

        match loaded {
            Ok(validator) => {
                info!(session_id = %self.inner.session_id, url = %schema_url, "Schema loaded");
                state.validator = Some(validator);
                if state.transition(PreviewStatus::Ready) {
                    self.inner.update_cycle(&mut state);
                }
            }
            Err(e) => {
                warn!(session_id = %self.inner.session_id, "Schema load failed: {}", e);
                if state.transition(PreviewStatus::LoadFailed) {
                    self.inner.panel.set_html(schema_load_error_page(&e));
                }
            }
        }
    }

    /// Run an update cycle now, bypassing the debounce.
    ///
    /// Cancels any pending debounced update. Returns `None` if the session
    /// is not ready.
    pub fn refresh(&self) -> Option<RenderOutput> {
        let mut state = self.inner.lock_state();
        if !state.status.accepts_updates() {
            return None;
        }
        state.cancel_pending();
        self.inner.update_cycle(&mut state)
    }

    /// Host notification: the text of `uri` changed.
    ///
    /// Changes to other documents are ignored. Must be called from within
    /// a tokio runtime.
    pub fn on_text_changed(&self, uri: &str) {
        if uri != self.inner.document.uri() {
            debug!(uri = %uri, "Ignoring change to another document");
            return;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Cannot schedule preview update outside a runtime: {}", e);
                return;
            }
        };

        let mut state = self.inner.lock_state();
        if !state.status.accepts_updates() {
            debug!(
                session_id = %self.inner.session_id,
                state = state.status.as_str(),
                "Ignoring change"
            );
            return;
        }

        state.cancel_pending();
        let generation = state.generation;
        let inner = Arc::clone(&self.inner);
        let delay = self.inner.debounce;

        state.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            inner.run_scheduled(generation);
        }));
    }

    /// Host notification: the panel was closed.
    ///
    /// Cancels the pending update and stops all further updates. Safe to
    /// call more than once.
    pub fn on_panel_disposed(&self) {
        let mut state = self.inner.lock_state();
        if state.status.is_disposed() {
            return;
        }
        state.cancel_pending();
        state.validator = None;
        if state.transition(PreviewStatus::Disposed) {
            info!(
                session_id = %self.inner.session_id,
                cycles = state.cycles,
                "Preview session disposed"
            );
        }
    }
}

impl ControllerInner {
    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn run_scheduled(&self, generation: u64) {
        let mut state = self.lock_state();
        if state.generation != generation || state.status.is_disposed() {
            debug!(session_id = %self.session_id, "Dropping stale update");
            return;
        }
        state.pending = None;
        self.update_cycle(&mut state);
    }

    fn update_cycle(&self, state: &mut ControllerState) -> Option<RenderOutput> {
        if !state.status.accepts_updates() {
            return None;
        }
        if !state.transition(PreviewStatus::Rendering) {
            return None;
        }

        let output = match state.validator.as_ref() {
            Some(validator) => {
                let text = self.document.text();
                Some(self.pipeline.process(validator, &text))
            }
            None => None,
        };

        if let Some(output) = &output {
            self.panel.set_html(output.html().to_string());
            state.cycles += 1;
            debug!(
                session_id = %self.session_id,
                cycle = state.cycles,
                output = output.kind(),
                "Update cycle complete"
            );
        }

        state.transition(PreviewStatus::Ready);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::host::{InMemoryDocument, RecordingPanel};
    use crate::adapters::schema::StaticSchemaLoader;
    use crate::application::Renderer;
    use crate::domain::preview::ParsedResume;
    use crate::ports::{ResumeTheme, ThemeError};
    use serde_json::json;

    struct NameTheme;

    impl ResumeTheme for NameTheme {
        fn name(&self) -> &str {
            "name"
        }

        fn render(&self, resume: &ParsedResume) -> Result<String, ThemeError> {
            Ok(format!("<h1>{}</h1>", resume.name().unwrap_or_default()))
        }
    }

    fn loader() -> StaticSchemaLoader {
        StaticSchemaLoader::new(json!({
            "type": "object",
            "properties": {
                "basics": {
                    "type": "object",
                    "properties": { "name": { "type": "string" } }
                }
            }
        }))
    }

    fn controller(text: &str) -> (PreviewController, Arc<InMemoryDocument>, Arc<RecordingPanel>) {
        let document = Arc::new(InMemoryDocument::json("file:///resume.json", text));
        let panel = Arc::new(RecordingPanel::new());
        let pipeline = PreviewPipeline::new(Renderer::new(Arc::new(NameTheme)));
        let controller = PreviewController::new(
            document.clone(),
            panel.clone(),
            pipeline,
            DEFAULT_DEBOUNCE,
        );
        (controller, document, panel)
    }

    #[tokio::test]
    async fn initialize_renders_immediately() {
        let (controller, _doc, panel) = controller(r#"{"basics": {"name": "Ada"}}"#);
        controller.initialize(&loader(), "memory://schema").await;

        assert_eq!(controller.status(), PreviewStatus::Ready);
        assert_eq!(panel.writes(), vec!["<h1>Ada</h1>"]);
        assert_eq!(controller.cycle_count(), 1);
    }

    #[tokio::test]
    async fn initialize_twice_loads_once() {
        let (controller, _doc, panel) = controller(r#"{}"#);
        controller.initialize(&loader(), "memory://schema").await;
        controller.initialize(&loader(), "memory://schema").await;

        assert_eq!(panel.write_count(), 1);
    }

    #[tokio::test]
    async fn refresh_reads_current_text() {
        let (controller, doc, panel) = controller(r#"{"basics": {"name": "Ada"}}"#);
        controller.initialize(&loader(), "memory://schema").await;

        doc.set_text(r#"{"basics": {"name": "Grace"}}"#);
        let output = controller.refresh().unwrap();

        assert_eq!(output, RenderOutput::Rendered("<h1>Grace</h1>".to_string()));
        assert_eq!(panel.current_html().as_deref(), Some("<h1>Grace</h1>"));
    }

    #[tokio::test]
    async fn refresh_before_initialize_does_nothing() {
        let (controller, _doc, panel) = controller(r#"{}"#);
        assert!(controller.refresh().is_none());
        assert_eq!(panel.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn change_schedules_single_pending_update() {
        let (controller, _doc, _panel) = controller(r#"{}"#);
        controller.initialize(&loader(), "memory://schema").await;

        controller.on_text_changed("file:///resume.json");
        controller.on_text_changed("file:///resume.json");
        assert!(controller.has_pending_update());

        tokio::time::sleep(DEFAULT_DEBOUNCE + Duration::from_millis(10)).await;
        assert!(!controller.has_pending_update());
        assert_eq!(controller.cycle_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_generation_is_dropped() {
        let (controller, _doc, panel) = controller(r#"{}"#);
        controller.initialize(&loader(), "memory://schema").await;

        controller.inner.run_scheduled(u64::MAX);
        assert_eq!(panel.write_count(), 1);
    }

    #[tokio::test]
    async fn dispose_is_idempotent() {
        let (controller, _doc, _panel) = controller(r#"{}"#);
        controller.initialize(&loader(), "memory://schema").await;

        controller.on_panel_disposed();
        controller.on_panel_disposed();
        assert_eq!(controller.status(), PreviewStatus::Disposed);
        assert!(controller.refresh().is_none());
    }

    #[test]
    fn change_outside_runtime_is_ignored() {
        let (controller, _doc, panel) = controller(r#"{}"#);
        controller.on_text_changed("file:///resume.json");
        assert!(!controller.has_pending_update());
        assert_eq!(panel.write_count(), 0);
    }
}
