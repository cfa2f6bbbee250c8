//! Error presentation.
//!
//! Two pure formatters: one for schema violations, one for anything else
//! (parse failures, schema load failures, theme failures). All text taken
//! from errors is escaped before it reaches the markup.

use super::html::{escape, wrap_document};
use super::ValidationIssue;

const ERROR_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    margin: 2rem;
    color: #1f2937;
}
h1 {
    color: #b91c1c;
    font-size: 1.4rem;
}
.error-message {
    white-space: pre-wrap;
    background: #fef2f2;
    border: 1px solid #fecaca;
    padding: 1rem;
}
.validation-errors code {
    color: #1d4ed8;
}
"#;

/// Render the list of schema violations.
///
/// One `<li>` per issue, `path: message`, in the order given. An empty
/// slice renders an empty list.
pub fn render_validation_errors(errors: &[ValidationIssue]) -> String {
    let mut items = String::new();
    for issue in errors {
        items.push_str(&format!(
            "        <li><code>{}</code>: {}</li>\n",
            escape(&issue.path),
            escape(&issue.message)
        ));
    }

    let body = format!(
        "    <h1>Resume does not match the schema</h1>\n    <ul class=\"validation-errors\">\n{}    </ul>",
        items
    );
    wrap_document("Validation Errors", ERROR_CSS, &body)
}

/// Render a generic error page with a heading and a message.
///
/// The message keeps its whitespace and line breaks.
pub fn render_error_page(title: &str, message: &str) -> String {
    let body = format!(
        "    <h1>{}</h1>\n    <pre class=\"error-message\">{}</pre>",
        escape(title),
        escape(message)
    );
    wrap_document(title, ERROR_CSS, &body)
}
