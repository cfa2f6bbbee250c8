//! # resume-preview entry point
//!
//! Previews a JSON Resume file without an editor. The rendered HTML is
//! written to an output file and refreshed whenever the resume changes on
//! disk. Ctrl-C closes the preview.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;

use resume_preview::adapters::host::{
    host_event_stream, FileDocumentSource, HeadlessHost, DEFAULT_POLL_INTERVAL,
};
use resume_preview::adapters::schema::{HttpSchemaLoader, StaticSchemaLoader};
use resume_preview::adapters::theme::BasicTheme;
use resume_preview::application::{PreviewSession, SessionSettings};
use resume_preview::config::AppConfig;
use resume_preview::ports::{HostEvent, SchemaLoader};
use resume_preview::telemetry::init_tracing;

/// Live HTML preview of a JSON Resume document.
///
/// Validates the resume against the JSON Resume schema and renders it to
/// an HTML file, re-rendering after every change.
#[derive(Parser, Debug)]
#[command(name = "resume-preview", version, about, long_about = None)]
struct Cli {
    /// Resume document to preview.
    resume: PathBuf,

    /// HTML file the preview is written to.
    #[arg(short, long, default_value = "resume-preview.html")]
    out: PathBuf,

    /// Fetch the schema from this URL instead of the configured one.
    #[arg(long, conflicts_with = "schema_file")]
    schema_url: Option<String>,

    /// Use a local schema file instead of fetching one.
    #[arg(long)]
    schema_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    if let Some(url) = cli.schema_url {
        config.schema.url = url;
    }
    if let Err(e) = config.validate() {
        eprintln!("error: invalid configuration: {e}");
        return ExitCode::from(2);
    }
    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }

    let mut settings = SessionSettings::from(&config);
    let loader: Box<dyn SchemaLoader> = match &cli.schema_file {
        Some(path) => match StaticSchemaLoader::from_file(path) {
            Ok(loader) => {
                settings.schema_url = format!("file://{}", path.display());
                Box::new(loader)
            }
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::from(1);
            }
        },
        None => match HttpSchemaLoader::new(config.schema.request_timeout()) {
            Ok(loader) => Box::new(loader),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {e}");
                return ExitCode::from(1);
            }
        },
    };

    let document = Arc::new(FileDocumentSource::new(&cli.resume));
    let host = HeadlessHost::new(document.clone(), &cli.out);
    let theme = Arc::new(BasicTheme::new());

    let session = match PreviewSession::start(&host, loader.as_ref(), theme, &settings).await {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(code = %e.code(), "Preview not started");
            return ExitCode::from(1);
        }
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let watcher = document.watch(DEFAULT_POLL_INTERVAL, tx.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(HostEvent::PanelDisposed);
        }
    });

    tracing::info!(
        resume = %cli.resume.display(),
        out = %cli.out.display(),
        "Watching for changes, press Ctrl-C to stop"
    );

    session.run(host_event_stream(rx)).await;
    watcher.abort();

    ExitCode::SUCCESS
}
