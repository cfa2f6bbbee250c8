//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while fetching or compiling the resume schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaLoadError {
    #[error("Failed to fetch schema from {url}: {reason}")]
    Request { url: String, reason: String },

    #[error("Schema endpoint {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Schema at {url} is not valid JSON: {reason}")]
    MalformedBody { url: String, reason: String },

    #[error("Schema could not be compiled: {reason}")]
    Compile { reason: String },
}

impl SchemaLoadError {
    /// Creates a transport-level failure.
    pub fn request(url: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaLoadError::Request {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a compile failure.
    pub fn compile(reason: impl Into<String>) -> Self {
        SchemaLoadError::Compile {
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Precondition errors
    NoActiveDocument,
    UnsupportedFileType,

    // Pipeline errors
    SchemaLoadFailed,
    DocumentParseFailed,
    RenderFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NoActiveDocument => "NO_ACTIVE_DOCUMENT",
            ErrorCode::UnsupportedFileType => "UNSUPPORTED_FILE_TYPE",
            ErrorCode::SchemaLoadFailed => "SCHEMA_LOAD_FAILED",
            ErrorCode::DocumentParseFailed => "DOCUMENT_PARSE_FAILED",
            ErrorCode::RenderFailed => "RENDER_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Everything that can go wrong during a preview session.
///
/// Validation failures are not listed here: a document that violates the
/// schema is a normal outcome, reported through `ValidationResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("No active editor found.")]
    NoActiveDocument,

    #[error("Active file is not a JSON file (language: {language_id}).")]
    UnsupportedFileType { language_id: String },

    #[error(transparent)]
    SchemaLoad(#[from] SchemaLoadError),

    #[error("{reason}")]
    DocumentParse { reason: String },

    #[error("{reason}")]
    Render { reason: String },
}

impl PreviewError {
    /// Creates a document parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        PreviewError::DocumentParse {
            reason: reason.into(),
        }
    }

    /// Creates a render error.
    pub fn render(reason: impl Into<String>) -> Self {
        PreviewError::Render {
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PreviewError::NoActiveDocument => ErrorCode::NoActiveDocument,
            PreviewError::UnsupportedFileType { .. } => ErrorCode::UnsupportedFileType,
            PreviewError::SchemaLoad(_) => ErrorCode::SchemaLoadFailed,
            PreviewError::DocumentParse { .. } => ErrorCode::DocumentParseFailed,
            PreviewError::Render { .. } => ErrorCode::RenderFailed,
        }
    }

    /// Heading used when the error is shown as an error page.
    pub fn title(&self) -> &'static str {
        match self {
            PreviewError::NoActiveDocument => "No Active Editor",
            PreviewError::UnsupportedFileType { .. } => "Unsupported File Type",
            PreviewError::SchemaLoad(_) => "Schema Load Error",
            PreviewError::DocumentParse { .. } => "Invalid JSON",
            PreviewError::Render { .. } => "Render Error",
        }
    }

    /// Returns true for errors raised before a panel exists.
    ///
    /// These go to the host as notifications instead of into the panel.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PreviewError::NoActiveDocument | PreviewError::UnsupportedFileType { .. }
        )
    }
}

/// Rejected state machine transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: String,
    pub to: String,
}
