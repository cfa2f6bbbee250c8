//! Preview domain - everything between raw editor text and panel HTML.
//!
//! - `document` - Raw text parsing and the validated `ParsedResume`
//! - `validation` - Compiled JSON Schema validator and its results
//! - `status` - Preview session lifecycle
//! - `output` - What an update cycle writes to the panel
//! - `error_page` - HTML pages for validation failures and errors
//! - `html` - Escaping and document scaffolding shared by all pages

mod document;
mod error_page;
mod output;
mod status;
mod validation;

pub mod html;

pub use document::{parse_document, ParsedResume, JSON_LANGUAGE_ID};
pub use error_page::{render_error_page, render_validation_errors};
pub use output::RenderOutput;
pub use status::PreviewStatus;
pub use validation::{CompiledValidator, ValidationIssue, ValidationResult};
