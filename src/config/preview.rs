//! Preview panel configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Title of the preview panel.
pub const DEFAULT_PANEL_TITLE: &str = "Resume Preview";

/// Preview panel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    /// Quiet period after the last edit before re-rendering
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Title of the preview panel
    #[serde(default = "default_panel_title")]
    pub panel_title: String,
}

impl PreviewConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Validate preview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms == 0 || self.debounce_ms > 10_000 {
            return Err(ValidationError::InvalidDebounce);
        }
        if self.panel_title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("preview.panel_title"));
        }
        Ok(())
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            panel_title: default_panel_title(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_panel_title() -> String {
    DEFAULT_PANEL_TITLE.to_string()
}
