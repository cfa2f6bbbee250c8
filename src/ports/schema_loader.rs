//! SchemaLoader port - Fetch and compile the resume schema.

use async_trait::async_trait;

use crate::domain::foundation::SchemaLoadError;
use crate::domain::preview::CompiledValidator;

/// Port for obtaining a compiled validator.
///
/// # Contract
///
/// - One fetch per call; no retry and no caching
/// - Non-2xx responses, malformed bodies and uncompilable schemas are all
///   errors
///
/// Called once per preview session, before the first render.
#[async_trait]
pub trait SchemaLoader: Send + Sync {
    /// Fetch the schema at `url` and compile it.
    async fn load(&self, url: &str) -> Result<CompiledValidator, SchemaLoadError>;
}
