//! Resume documents before and after validation.
//!
//! Text coming from the editor is parsed into an untyped `serde_json::Value`
//! tree. Only a value that has passed schema validation is wrapped in
//! `ParsedResume`, so themes never see unchecked input.

use serde_json::Value;

use crate::domain::foundation::PreviewError;

/// Language identifier the active document must report.
pub const JSON_LANGUAGE_ID: &str = "json";

/// Parses document text into an untyped JSON tree.
///
/// # Errors
///
/// Returns `PreviewError::DocumentParse` carrying the parser message.
/// A failed parse never yields a partial value.
pub fn parse_document(text: &str) -> Result<Value, PreviewError> {
    serde_json::from_str(text).map_err(|e| PreviewError::parse(e.to_string()))
}

/// A resume that has passed schema validation.
///
/// Constructed by `CompiledValidator::validate`; transient and discarded
/// after the update cycle that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResume(Value);

impl ParsedResume {
    pub(crate) fn validated(value: Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the resume and returns the JSON tree.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns `basics.name` when present.
    pub fn name(&self) -> Option<&str> {
        self.0.pointer("/basics/name").and_then(Value::as_str)
    }
}
