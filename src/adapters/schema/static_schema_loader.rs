//! Static Schema Loader - Compiles a schema held in memory.
//!
//! Used for offline previews (`--schema-file`) and in tests. The `url`
//! passed to `load` is ignored.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::SchemaLoadError;
use crate::domain::preview::CompiledValidator;
use crate::ports::SchemaLoader;

/// Schema loader backed by an in-memory schema document.
#[derive(Debug, Clone)]
pub struct StaticSchemaLoader {
    schema: Value,
}

impl StaticSchemaLoader {
    /// Creates a loader for an already-parsed schema.
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Reads and parses a schema file.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError::Request` if the file cannot be read and
    /// `SchemaLoadError::MalformedBody` if it is not JSON.
    pub fn from_file(path: &Path) -> Result<Self, SchemaLoadError> {
        let location = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaLoadError::request(&location, e.to_string()))?;
        let schema = serde_json::from_str(&content).map_err(|e| SchemaLoadError::MalformedBody {
            url: location,
            reason: e.to_string(),
        })?;
        Ok(Self::new(schema))
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }
}

#[async_trait]
impl SchemaLoader for StaticSchemaLoader {
    async fn load(&self, _url: &str) -> Result<CompiledValidator, SchemaLoadError> {
        CompiledValidator::compile(&self.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn loads_in_memory_schema() {
        let loader = StaticSchemaLoader::new(json!({"type": "object"}));
        let validator = loader.load("ignored").await.unwrap();
        assert!(validator.validate(json!({})).is_valid());
        assert!(!validator.validate(json!(1)).is_valid());
    }

    #[tokio::test]
    async fn invalid_schema_fails_to_load() {
        let loader = StaticSchemaLoader::new(json!({"type": 12}));
        let err = loader.load("ignored").await.unwrap_err();
        assert!(matches!(err, SchemaLoadError::Compile { .. }));
    }

    #[test]
    fn reads_schema_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "object"}}"#).unwrap();

        let loader = StaticSchemaLoader::from_file(file.path()).unwrap();
        assert_eq!(loader.schema(), &json!({"type": "object"}));
    }

    #[test]
    fn malformed_schema_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = StaticSchemaLoader::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SchemaLoadError::MalformedBody { .. }));
    }

    #[test]
    fn missing_schema_file_is_reported() {
        let err = StaticSchemaLoader::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SchemaLoadError::Request { .. }));
    }
}
