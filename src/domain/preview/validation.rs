//! Schema validation backed by the `jsonschema` crate.
//!
//! A `CompiledValidator` is built once per preview session and reused for
//! every update cycle. Validation always collects every violation so the
//! whole error set can be shown at once.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::ParsedResume;
use crate::domain::foundation::SchemaLoadError;

/// Path used for violations located at the document root.
const ROOT_PATH: &str = "/";

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// JSON Pointer to the offending value (`/` for the root).
    pub path: String,
    /// Message produced by the validation engine.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() {
                ROOT_PATH.to_string()
            } else {
                path
            },
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of validating a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(ParsedResume),
    /// Violations in engine output order, not deduplicated.
    Invalid(Vec<ValidationIssue>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Returns the violations, empty when valid.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(issues) => issues,
        }
    }
}

/// A compiled JSON Schema.
///
/// Owned by a single preview session; `Send + Sync` so the session can
/// run its update cycles from timer tasks.
pub struct CompiledValidator {
    inner: jsonschema::Validator,
}

impl CompiledValidator {
    /// Compiles a schema document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError::Compile` if the schema is structurally
    /// invalid.
    pub fn compile(schema: &Value) -> Result<Self, SchemaLoadError> {
        jsonschema::validator_for(schema)
            .map(|inner| Self { inner })
            .map_err(|e| SchemaLoadError::compile(e.to_string()))
    }

    /// Validates a parsed document, collecting every violation.
    pub fn validate(&self, value: Value) -> ValidationResult {
        let issues: Vec<ValidationIssue> = self
            .inner
            .iter_errors(&value)
            .map(|e| ValidationIssue::new(e.instance_path.to_string(), e.to_string()))
            .collect();

        if issues.is_empty() {
            ValidationResult::Valid(ParsedResume::validated(value))
        } else {
            ValidationResult::Invalid(issues)
        }
    }
}

impl fmt::Debug for CompiledValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledValidator").finish_non_exhaustive()
    }
}
