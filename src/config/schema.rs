//! Schema source configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Location of the JSON Resume schema.
pub const DEFAULT_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/jsonresume/resume-schema/master/schema.json";

/// Schema source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    /// URL the schema is fetched from
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl SchemaConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate schema configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("schema.url"));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ValidationError::InvalidSchemaUrl);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_SCHEMA_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}
