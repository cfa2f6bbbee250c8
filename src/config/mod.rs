//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `RESUME_PREVIEW`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use resume_preview::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Schema: {}", config.schema.url);
//! ```

mod error;
mod logging;
mod preview;
mod schema;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use preview::{PreviewConfig, DEFAULT_PANEL_TITLE};
pub use schema::{SchemaConfig, DEFAULT_SCHEMA_URL};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the resume schema comes from
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Preview panel behaviour
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `RESUME_PREVIEW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `RESUME_PREVIEW__SCHEMA__URL=...` -> `schema.url = ...`
    /// - `RESUME_PREVIEW__PREVIEW__DEBOUNCE_MS=500` -> `preview.debounce_ms = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RESUME_PREVIEW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.schema.validate()?;
        self.preview.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
