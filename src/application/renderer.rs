//! Renderer - Adapts a `ResumeTheme` for the update cycle.
//!
//! `render` is the bare theme call. `render_guarded` is the error boundary
//! the controller uses: a theme error or a theme panic becomes a
//! `PreviewError::Render` instead of tearing down the session.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::domain::foundation::PreviewError;
use crate::domain::preview::ParsedResume;
use crate::ports::{ResumeTheme, ThemeError};

/// Renders validated resumes through a swappable theme.
#[derive(Clone)]
pub struct Renderer {
    theme: Arc<dyn ResumeTheme>,
}

impl Renderer {
    pub fn new(theme: Arc<dyn ResumeTheme>) -> Self {
        Self { theme }
    }

    pub fn theme_name(&self) -> &str {
        self.theme.name()
    }

    /// Render the resume. Theme errors propagate unchanged.
    pub fn render(&self, resume: &ParsedResume) -> Result<String, ThemeError> {
        self.theme.render(resume)
    }

    /// Render the resume, converting theme errors and panics into
    /// `PreviewError::Render`.
    pub fn render_guarded(&self, resume: &ParsedResume) -> Result<String, PreviewError> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.render(resume))) {
            Ok(Ok(html)) => Ok(html),
            Ok(Err(e)) => Err(PreviewError::render(e.to_string())),
            Err(payload) => Err(PreviewError::render(format!(
                "Theme '{}' panicked: {}",
                self.theme_name(),
                panic_message(payload.as_ref())
            ))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedTheme(&'static str);

    impl ResumeTheme for FixedTheme {
        fn name(&self) -> &str {
            "fixed"
        }

        fn render(&self, _resume: &ParsedResume) -> Result<String, ThemeError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingTheme;

    impl ResumeTheme for FailingTheme {
        fn name(&self) -> &str {
            "failing"
        }

        fn render(&self, _resume: &ParsedResume) -> Result<String, ThemeError> {
            Err(ThemeError::failed("failing", "missing template"))
        }
    }

    struct PanickingTheme;

    impl ResumeTheme for PanickingTheme {
        fn name(&self) -> &str {
            "panicking"
        }

        fn render(&self, _resume: &ParsedResume) -> Result<String, ThemeError> {
            panic!("template blew up")
        }
    }

    fn resume() -> ParsedResume {
        ParsedResume::validated(json!({"basics": {"name": "Ada"}}))
    }

    #[test]
    fn passes_theme_output_through() {
        let renderer = Renderer::new(Arc::new(FixedTheme("<p>ok</p>")));
        assert_eq!(renderer.render(&resume()).unwrap(), "<p>ok</p>");
        assert_eq!(renderer.render_guarded(&resume()).unwrap(), "<p>ok</p>");
    }

    #[test]
    fn unguarded_render_propagates_theme_error() {
        let renderer = Renderer::new(Arc::new(FailingTheme));
        assert!(matches!(
            renderer.render(&resume()),
            Err(ThemeError::Failed { .. })
        ));
    }

    #[test]
    fn guarded_render_converts_theme_error() {
        let renderer = Renderer::new(Arc::new(FailingTheme));
        let err = renderer.render_guarded(&resume()).unwrap_err();
        assert_eq!(err.title(), "Render Error");
        assert!(err.to_string().contains("missing template"));
    }

    #[test]
    fn guarded_render_catches_panics() {
        let renderer = Renderer::new(Arc::new(PanickingTheme));
        let err = renderer.render_guarded(&resume()).unwrap_err();
        assert!(matches!(err, PreviewError::Render { .. }));
        assert!(err.to_string().contains("template blew up"));
        assert!(err.to_string().contains("panicking"));
    }
}
