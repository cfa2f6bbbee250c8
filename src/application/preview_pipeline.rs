//! PreviewPipeline - One update cycle from text to HTML.
//!
//! parse -> validate -> render, stopping at the first branch that produces
//! a page. Never fails: every outcome is some `RenderOutput`.

use tracing::{debug, warn};

use crate::domain::foundation::{PreviewError, SchemaLoadError};
use crate::domain::preview::{
    parse_document, render_error_page, render_validation_errors, CompiledValidator, RenderOutput,
    ValidationResult,
};

use super::Renderer;

/// Turns document text into the HTML for one update cycle.
#[derive(Clone)]
pub struct PreviewPipeline {
    renderer: Renderer,
}

impl PreviewPipeline {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Produce the page for `text`.
    pub fn process(&self, validator: &CompiledValidator, text: &str) -> RenderOutput {
        let value = match parse_document(text) {
            Ok(value) => value,
            Err(e) => {
                debug!("Document is not valid JSON: {}", e);
                return error_output(&e);
            }
        };

        match validator.validate(value) {
            ValidationResult::Invalid(issues) => {
                debug!(count = issues.len(), "Document failed schema validation");
                RenderOutput::ValidationErrors(render_validation_errors(&issues))
            }
            ValidationResult::Valid(resume) => match self.renderer.render_guarded(&resume) {
                Ok(html) => RenderOutput::Rendered(html),
                Err(e) => {
                    warn!(theme = %self.renderer.theme_name(), "Render failed: {}", e);
                    error_output(&e)
                }
            },
        }
    }
}

/// Page shown when the schema could not be loaded.
pub fn schema_load_error_page(err: &SchemaLoadError) -> String {
    let err = PreviewError::from(err.clone());
    render_error_page(err.title(), &err.to_string())
}

fn error_output(err: &PreviewError) -> RenderOutput {
    RenderOutput::ErrorPage(render_error_page(err.title(), &err.to_string()))
}
