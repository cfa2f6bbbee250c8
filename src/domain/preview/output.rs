//! The single artifact an update cycle writes to the panel.

/// HTML produced by one update cycle.
///
/// Exactly one variant is produced per cycle; pages are never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    /// Theme output for a valid resume.
    Rendered(String),
    /// Schema violation list.
    ValidationErrors(String),
    /// Parse, load or render failure page.
    ErrorPage(String),
}

impl RenderOutput {
    pub fn html(&self) -> &str {
        match self {
            RenderOutput::Rendered(html)
            | RenderOutput::ValidationErrors(html)
            | RenderOutput::ErrorPage(html) => html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            RenderOutput::Rendered(html)
            | RenderOutput::ValidationErrors(html)
            | RenderOutput::ErrorPage(html) => html,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderOutput::Rendered(_) => "rendered",
            RenderOutput::ValidationErrors(_) => "validation_errors",
            RenderOutput::ErrorPage(_) => "error_page",
        }
    }
}
