//! HTTP Schema Loader - Implementation of SchemaLoader over reqwest.
//!
//! Performs a single GET per session. The client timeout is the only bound
//! on the fetch; failures are reported, never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::foundation::SchemaLoadError;
use crate::domain::preview::CompiledValidator;
use crate::ports::SchemaLoader;

/// Default request timeout for schema fetches.
pub const DEFAULT_SCHEMA_TIMEOUT: Duration = Duration::from_secs(30);

/// Schema loader that fetches the schema over HTTP(S).
///
/// # Example
///
/// ```ignore
/// let loader = HttpSchemaLoader::new(Duration::from_secs(10))?;
/// let validator = loader.load(DEFAULT_SCHEMA_URL).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSchemaLoader {
    client: Client,
    timeout: Duration,
}

impl HttpSchemaLoader {
    /// Creates a loader whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// Creates a loader with the default timeout.
    pub fn with_default_timeout() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_SCHEMA_TIMEOUT)
    }

    async fn fetch(&self, url: &str) -> Result<Value, SchemaLoadError> {
        tracing::debug!("Fetching schema from {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch schema: {}", e);
            if e.is_timeout() {
                SchemaLoadError::request(
                    url,
                    format!("request timed out after {}s", self.timeout.as_secs()),
                )
            } else if e.is_connect() {
                SchemaLoadError::request(url, format!("connection failed: {}", e))
            } else {
                SchemaLoadError::request(url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Schema endpoint returned {}", status);
            return Err(SchemaLoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read schema body: {}", e);
            SchemaLoadError::request(url, e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse schema: {}", e);
            SchemaLoadError::MalformedBody {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl SchemaLoader for HttpSchemaLoader {
    async fn load(&self, url: &str) -> Result<CompiledValidator, SchemaLoadError> {
        let schema = self.fetch(url).await?;

        // Compilation may resolve remote references with a blocking client.
        let validator = tokio::task::spawn_blocking(move || CompiledValidator::compile(&schema))
            .await
            .map_err(|e| SchemaLoadError::compile(format!("compile task failed: {}", e)))??;

        tracing::debug!("Compiled schema from {}", url);
        Ok(validator)
    }
}
