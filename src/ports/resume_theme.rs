//! ResumeTheme port - Pluggable resume rendering.

use thiserror::Error;

use crate::domain::preview::ParsedResume;

/// Errors reported by a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Theme '{theme}' failed: {reason}")]
    Failed { theme: String, reason: String },
}

impl ThemeError {
    pub fn failed(theme: impl Into<String>, reason: impl Into<String>) -> Self {
        ThemeError::Failed {
            theme: theme.into(),
            reason: reason.into(),
        }
    }
}

/// Port for turning a validated resume into HTML.
///
/// Treated as a pure function of the document. Implementations may fail
/// or even panic; the caller converts both into a render error page.
pub trait ResumeTheme: Send + Sync {
    /// Theme name for logging.
    fn name(&self) -> &str;

    /// Render the resume as a complete HTML document.
    fn render(&self, resume: &ParsedResume) -> Result<String, ThemeError>;
}
