//! End-to-end tests for PreviewSession against a recording host.
//!
//! Debounce tests run on paused time so the quiet period elapses
//! deterministically.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use resume_preview::adapters::host::{host_event_stream, InMemoryDocument, RecordingHost};
use resume_preview::adapters::schema::StaticSchemaLoader;
use resume_preview::application::{
    PreviewPipeline, PreviewSession, Renderer, SessionSettings, SESSION_STARTED_MESSAGE,
};
use resume_preview::domain::foundation::{ErrorCode, PreviewError};
use resume_preview::domain::preview::{
    CompiledValidator, ParsedResume, PreviewStatus, RenderOutput, ValidationResult,
};
use resume_preview::ports::{
    DocumentSource, HostEvent, PanelOptions, ResumeTheme, ThemeError, ViewColumn,
};
use serde_json::{json, Value};
use tokio::sync::mpsc;

const URI: &str = "file:///home/ada/resume.json";
const DEBOUNCE: Duration = Duration::from_millis(250);

fn schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "basics": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "email": { "type": "string" }
                }
            }
        }
    })
}

/// Renders the resume name, panicking on the name "boom".
struct NameTheme;

impl ResumeTheme for NameTheme {
    fn name(&self) -> &str {
        "name"
    }

    fn render(&self, resume: &ParsedResume) -> Result<String, ThemeError> {
        match resume.name() {
            Some("boom") => panic!("theme exploded"),
            Some(name) => Ok(format!("<h1>{}</h1>", name)),
            None => Err(ThemeError::failed("name", "resume has no name")),
        }
    }
}

fn settings() -> SessionSettings {
    SessionSettings {
        schema_url: "memory://schema".to_string(),
        debounce: DEBOUNCE,
        ..SessionSettings::default()
    }
}

fn resume(name: &str) -> String {
    json!({ "basics": { "name": name } }).to_string()
}

async fn start(text: &str) -> (PreviewSession, RecordingHost, Arc<InMemoryDocument>) {
    let document = Arc::new(InMemoryDocument::json(URI, text));
    let host = RecordingHost::with_document(document.clone());
    let session = PreviewSession::start(
        &host,
        &StaticSchemaLoader::new(schema()),
        Arc::new(NameTheme),
        &settings(),
    )
    .await
    .expect("session should start");
    (session, host, document)
}

async fn settle() {
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
}

// ───────────────────────────────────────────────────────────────
// Activation
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn no_active_document_is_rejected_without_panel() {
    let host = RecordingHost::new();

    let err = PreviewSession::start(
        &host,
        &StaticSchemaLoader::new(schema()),
        Arc::new(NameTheme),
        &settings(),
    )
    .await
    .err()
    .unwrap();

    assert_eq!(err, PreviewError::NoActiveDocument);
    assert_eq!(host.error_messages(), vec!["No active editor found."]);
    assert!(host.panel_requests().is_empty());
    assert!(host.info_messages().is_empty());
}

#[tokio::test]
async fn non_json_document_is_rejected_without_panel() {
    let document = Arc::new(InMemoryDocument::new("file:///notes.md", "markdown", "# Notes"));
    let host = RecordingHost::with_document(document);

    let err = PreviewSession::start(
        &host,
        &StaticSchemaLoader::new(schema()),
        Arc::new(NameTheme),
        &settings(),
    )
    .await
    .err()
    .unwrap();

    assert_eq!(err.code(), ErrorCode::UnsupportedFileType);
    assert_eq!(host.error_messages().len(), 1);
    assert!(host.error_messages()[0].contains("markdown"));
    assert!(host.panel_requests().is_empty());
}

#[tokio::test]
async fn activation_opens_one_script_free_panel() {
    let (session, host, _doc) = start(&resume("Ada")).await;

    assert_eq!(session.status(), PreviewStatus::Ready);
    assert_eq!(host.info_messages(), vec![SESSION_STARTED_MESSAGE]);

    let requests = host.panel_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, "Resume Preview");
    assert_eq!(requests[0].column, ViewColumn::One);
    assert_eq!(requests[0].options, PanelOptions { enable_scripts: false });
}

#[tokio::test]
async fn initial_render_matches_theme_output() {
    let text = resume("Ada Lovelace");
    let (_session, host, _doc) = start(&text).await;

    let validator = CompiledValidator::compile(&schema()).unwrap();
    let parsed = match validator.validate(serde_json::from_str(&text).unwrap()) {
        ValidationResult::Valid(resume) => resume,
        ValidationResult::Invalid(issues) => panic!("unexpected issues: {issues:?}"),
    };
    let expected = Renderer::new(Arc::new(NameTheme)).render(&parsed).unwrap();

    let panel = host.last_panel().unwrap();
    assert_eq!(panel.writes(), vec![expected]);
}

// ───────────────────────────────────────────────────────────────
// Update cycles
// ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn validation_errors_list_every_issue() {
    let text = json!({ "name": 1, "basics": { "email": false } }).to_string();
    let (_session, host, _doc) = start(&text).await;

    let html = host.last_panel().unwrap().current_html().unwrap();
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("<li><code>/name</code>: "));
    assert!(html.contains("<li><code>/basics/email</code>: "));
}

#[tokio::test]
async fn invalid_json_shows_error_page_then_recovers() {
    let (session, host, doc) = start("{ \"basics\": ").await;
    let panel = host.last_panel().unwrap();

    assert!(panel.current_html().unwrap().contains("<h1>Invalid JSON</h1>"));

    doc.set_text(resume("Grace"));
    let output = session.controller().refresh().unwrap();

    assert_eq!(output, RenderOutput::Rendered("<h1>Grace</h1>".to_string()));
    assert_eq!(panel.write_count(), 2);
}

#[tokio::test]
async fn theme_panic_becomes_render_error_page() {
    let (session, host, doc) = start(&resume("boom")).await;
    let panel = host.last_panel().unwrap();

    let html = panel.current_html().unwrap();
    assert!(html.contains("<h1>Render Error</h1>"));
    assert!(html.contains("theme exploded"));
    assert_eq!(session.status(), PreviewStatus::Ready);

    doc.set_text(resume("Ada"));
    session.controller().refresh();
    assert_eq!(panel.current_html().as_deref(), Some("<h1>Ada</h1>"));
}

#[tokio::test]
async fn theme_failure_becomes_render_error_page() {
    let (_session, host, _doc) = start(r#"{"basics": {}}"#).await;

    let html = host.last_panel().unwrap().current_html().unwrap();
    assert!(html.contains("<h1>Render Error</h1>"));
    assert!(html.contains("resume has no name"));
}

// ───────────────────────────────────────────────────────────────
// Debounce and disposal
// ───────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn burst_of_changes_runs_one_cycle_with_latest_text() {
    let (session, host, doc) = start(&resume("v0")).await;
    let panel = host.last_panel().unwrap();

    for i in 1..=5 {
        doc.set_text(resume(&format!("v{i}")));
        session.controller().on_text_changed(URI);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(panel.write_count(), 1);

    settle().await;
    assert_eq!(panel.writes(), vec!["<h1>v0</h1>", "<h1>v5</h1>"]);
}

#[tokio::test(start_paused = true)]
async fn changes_separated_by_quiet_period_each_update() {
    let (session, host, doc) = start(&resume("one")).await;
    let panel = host.last_panel().unwrap();

    doc.set_text(resume("two"));
    session.controller().on_text_changed(URI);
    settle().await;

    doc.set_text(resume("three"));
    session.controller().on_text_changed(URI);
    settle().await;

    assert_eq!(panel.writes(), vec!["<h1>one</h1>", "<h1>two</h1>", "<h1>three</h1>"]);
}

#[tokio::test(start_paused = true)]
async fn changes_to_other_documents_are_ignored() {
    let (session, host, _doc) = start(&resume("Ada")).await;

    session.controller().on_text_changed("file:///home/ada/other.json");
    assert!(!session.controller().has_pending_update());

    settle().await;
    assert_eq!(host.last_panel().unwrap().write_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_pending_update() {
    let (session, host, doc) = start(&resume("Ada")).await;
    let panel = host.last_panel().unwrap();

    doc.set_text(resume("Grace"));
    session.controller().on_text_changed(URI);
    session.controller().on_panel_disposed();
    settle().await;

    assert_eq!(session.status(), PreviewStatus::Disposed);
    assert_eq!(panel.write_count(), 1);

    session.controller().on_text_changed(URI);
    assert!(!session.controller().has_pending_update());
    settle().await;
    assert_eq!(panel.write_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn run_delivers_events_until_panel_disposed() {
    let (session, host, doc) = start(&resume("Ada")).await;
    let panel = host.last_panel().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    let events = tx.clone();
    let driver = tokio::spawn(async move {
        doc.set_text(resume("Grace"));
        events.send(HostEvent::text_changed(URI)).unwrap();
        tokio::time::sleep(DEBOUNCE * 2).await;
        events.send(HostEvent::PanelDisposed).unwrap();
    });

    session.run(host_event_stream(rx)).await;
    driver.await.unwrap();

    assert_eq!(session.status(), PreviewStatus::Disposed);
    assert_eq!(panel.writes(), vec!["<h1>Ada</h1>", "<h1>Grace</h1>"]);
    drop(tx);
}

#[tokio::test]
async fn run_disposes_when_event_stream_ends() {
    let (session, _host, _doc) = start(&resume("Ada")).await;
    let (tx, rx) = mpsc::unbounded_channel::<HostEvent>();
    drop(tx);

    session.run(host_event_stream(rx)).await;
    assert_eq!(session.status(), PreviewStatus::Disposed);
}

// ───────────────────────────────────────────────────────────────
// Pipeline properties
// ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn malformed_json_always_yields_invalid_json_page(text in "\\{[a-z\"]{0,12}") {
        let validator = CompiledValidator::compile(&schema()).unwrap();
        let pipeline = PreviewPipeline::new(Renderer::new(Arc::new(NameTheme)));

        let output = pipeline.process(&validator, &text);
        prop_assert!(matches!(output, RenderOutput::ErrorPage(_)));
        prop_assert!(output.html().contains("<h1>Invalid JSON</h1>"));
    }
}

#[test]
fn in_memory_document_reports_json_language() {
    let doc = InMemoryDocument::json(URI, "{}");
    assert_eq!(doc.language_id(), "json");
    assert_eq!(doc.uri(), URI);
}
