//! Basic Theme - Built-in renderer for JSON Resume documents.
//!
//! Renders the common JSON Resume sections into a single self-contained
//! HTML page. Every string taken from the resume is escaped. Sections or
//! fields that are missing or have an unexpected shape are skipped rather
//! than treated as errors, since the schema decides what is acceptable.

use serde_json::{Map, Value};

use crate::domain::preview::html::{escape, wrap_document};
use crate::domain::preview::ParsedResume;
use crate::ports::{ResumeTheme, ThemeError};

const THEME_NAME: &str = "basic";

/// The built-in resume theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTheme;

impl BasicTheme {
    pub fn new() -> Self {
        Self
    }
}

impl ResumeTheme for BasicTheme {
    fn name(&self) -> &str {
        THEME_NAME
    }

    fn render(&self, resume: &ParsedResume) -> Result<String, ThemeError> {
        let root = resume
            .as_value()
            .as_object()
            .ok_or_else(|| ThemeError::failed(THEME_NAME, "resume must be a JSON object"))?;

        let mut body = String::from("<main class=\"resume\">\n");
        if let Some(basics) = root.get("basics").and_then(Value::as_object) {
            render_basics(&mut body, basics);
        }
        render_work(&mut body, root.get("work"));
        render_education(&mut body, root.get("education"));
        render_skills(&mut body, root.get("skills"));
        render_projects(&mut body, root.get("projects"));
        render_languages(&mut body, root.get("languages"));
        render_interests(&mut body, root.get("interests"));
        body.push_str("</main>");

        let title = resume.name().unwrap_or("Resume");
        Ok(wrap_document(title, THEME_CSS, &body))
    }
}

// =========================================================================
// Field helpers
// =========================================================================

fn text<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn entries(value: Option<&Value>) -> Vec<&Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

fn strings<'a>(obj: &'a Map<String, Value>, key: &str) -> Vec<&'a str> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn date_range(obj: &Map<String, Value>) -> Option<String> {
    match (text(obj, "startDate"), text(obj, "endDate")) {
        (Some(start), Some(end)) => Some(format!("{} – {}", escape(start), escape(end))),
        (Some(start), None) => Some(format!("{} – Present", escape(start))),
        (None, Some(end)) => Some(escape(end)),
        (None, None) => None,
    }
}

fn push_list(out: &mut String, class: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("<ul class=\"{}\">\n", class));
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    out.push_str("</ul>\n");
}

fn open_section(out: &mut String, id: &str, heading: &str) {
    out.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n",
        id, heading
    ));
}

// =========================================================================
// Sections
// =========================================================================

fn render_basics(out: &mut String, basics: &Map<String, Value>) {
    out.push_str("<header class=\"basics\">\n");
    if let Some(name) = text(basics, "name") {
        out.push_str(&format!("<h1>{}</h1>\n", escape(name)));
    }
    if let Some(label) = text(basics, "label") {
        out.push_str(&format!("<p class=\"label\">{}</p>\n", escape(label)));
    }

    let mut contact = Vec::new();
    if let Some(email) = text(basics, "email") {
        contact.push(format!(
            "<a href=\"mailto:{0}\">{0}</a>",
            escape(email)
        ));
    }
    if let Some(phone) = text(basics, "phone") {
        contact.push(escape(phone));
    }
    if let Some(url) = text(basics, "url") {
        contact.push(format!("<a href=\"{0}\">{0}</a>", escape(url)));
    }
    if let Some(location) = basics.get("location").and_then(Value::as_object) {
        let parts: Vec<&str> = ["city", "region", "countryCode"]
            .iter()
            .filter_map(|key| text(location, key))
            .collect();
        if !parts.is_empty() {
            contact.push(escape(&parts.join(", ")));
        }
    }
    if !contact.is_empty() {
        out.push_str(&format!(
            "<p class=\"contact\">{}</p>\n",
            contact.join(" · ")
        ));
    }

    if let Some(summary) = text(basics, "summary") {
        out.push_str(&format!("<p class=\"summary\">{}</p>\n", escape(summary)));
    }

    let profiles = entries(basics.get("profiles"));
    if !profiles.is_empty() {
        out.push_str("<ul class=\"profiles\">\n");
        for profile in profiles {
            let network = text(profile, "network").unwrap_or("Profile");
            let label = text(profile, "username")
                .or_else(|| text(profile, "url"))
                .unwrap_or_default();
            match text(profile, "url") {
                Some(url) => out.push_str(&format!(
                    "<li>{}: <a href=\"{}\">{}</a></li>\n",
                    escape(network),
                    escape(url),
                    escape(label)
                )),
                None => out.push_str(&format!(
                    "<li>{}: {}</li>\n",
                    escape(network),
                    escape(label)
                )),
            }
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</header>\n");
}

fn render_work(out: &mut String, work: Option<&Value>) {
    let jobs = entries(work);
    if jobs.is_empty() {
        return;
    }
    open_section(out, "work", "Work Experience");
    for job in jobs {
        out.push_str("<article class=\"entry\">\n");
        let position = text(job, "position");
        let company = text(job, "name");
        match (position, company) {
            (Some(position), Some(company)) => out.push_str(&format!(
                "<h3>{}, {}</h3>\n",
                escape(position),
                escape(company)
            )),
            (Some(single), None) | (None, Some(single)) => {
                out.push_str(&format!("<h3>{}</h3>\n", escape(single)))
            }
            (None, None) => {}
        }
        if let Some(dates) = date_range(job) {
            out.push_str(&format!("<p class=\"dates\">{}</p>\n", dates));
        }
        if let Some(summary) = text(job, "summary") {
            out.push_str(&format!("<p>{}</p>\n", escape(summary)));
        }
        push_list(out, "highlights", &strings(job, "highlights"));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn render_education(out: &mut String, education: Option<&Value>) {
    let schools = entries(education);
    if schools.is_empty() {
        return;
    }
    open_section(out, "education", "Education");
    for school in schools {
        out.push_str("<article class=\"entry\">\n");
        if let Some(institution) = text(school, "institution") {
            out.push_str(&format!("<h3>{}</h3>\n", escape(institution)));
        }
        let degree: Vec<&str> = ["studyType", "area"]
            .iter()
            .filter_map(|key| text(school, key))
            .collect();
        if !degree.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", escape(&degree.join(", "))));
        }
        if let Some(dates) = date_range(school) {
            out.push_str(&format!("<p class=\"dates\">{}</p>\n", dates));
        }
        push_list(out, "courses", &strings(school, "courses"));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn render_skills(out: &mut String, skills: Option<&Value>) {
    let skills = entries(skills);
    if skills.is_empty() {
        return;
    }
    open_section(out, "skills", "Skills");
    for skill in skills {
        out.push_str("<article class=\"entry\">\n");
        let name = text(skill, "name").unwrap_or_default();
        match text(skill, "level") {
            Some(level) => out.push_str(&format!(
                "<h3>{} <span class=\"level\">{}</span></h3>\n",
                escape(name),
                escape(level)
            )),
            None => out.push_str(&format!("<h3>{}</h3>\n", escape(name))),
        }
        push_list(out, "keywords", &strings(skill, "keywords"));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn render_projects(out: &mut String, projects: Option<&Value>) {
    let projects = entries(projects);
    if projects.is_empty() {
        return;
    }
    open_section(out, "projects", "Projects");
    for project in projects {
        out.push_str("<article class=\"entry\">\n");
        if let Some(name) = text(project, "name") {
            match text(project, "url") {
                Some(url) => out.push_str(&format!(
                    "<h3><a href=\"{}\">{}</a></h3>\n",
                    escape(url),
                    escape(name)
                )),
                None => out.push_str(&format!("<h3>{}</h3>\n", escape(name))),
            }
        }
        if let Some(dates) = date_range(project) {
            out.push_str(&format!("<p class=\"dates\">{}</p>\n", dates));
        }
        if let Some(description) = text(project, "description") {
            out.push_str(&format!("<p>{}</p>\n", escape(description)));
        }
        push_list(out, "highlights", &strings(project, "highlights"));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn render_languages(out: &mut String, languages: Option<&Value>) {
    let languages = entries(languages);
    if languages.is_empty() {
        return;
    }
    open_section(out, "languages", "Languages");
    out.push_str("<ul class=\"languages\">\n");
    for language in languages {
        let name = text(language, "language").unwrap_or_default();
        match text(language, "fluency") {
            Some(fluency) => out.push_str(&format!(
                "<li>{} ({})</li>\n",
                escape(name),
                escape(fluency)
            )),
            None => out.push_str(&format!("<li>{}</li>\n", escape(name))),
        }
    }
    out.push_str("</ul>\n</section>\n");
}

fn render_interests(out: &mut String, interests: Option<&Value>) {
    let interests = entries(interests);
    if interests.is_empty() {
        return;
    }
    open_section(out, "interests", "Interests");
    for interest in interests {
        out.push_str("<article class=\"entry\">\n");
        if let Some(name) = text(interest, "name") {
            out.push_str(&format!("<h3>{}</h3>\n", escape(name)));
        }
        push_list(out, "keywords", &strings(interest, "keywords"));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

const THEME_CSS: &str = r#"
:root {
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --accent-color: #0f766e;
    --border-color: #e5e7eb;
}

body {
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 15px;
    line-height: 1.55;
    color: var(--text-color);
    max-width: 820px;
    margin: 2rem auto;
    padding: 0 1.5rem;
}

h1 {
    margin-bottom: 0.2rem;
    font-size: 2.2rem;
}

h2 {
    color: var(--accent-color);
    border-bottom: 1px solid var(--border-color);
    padding-bottom: 0.2rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-size: 1rem;
}

h3 {
    margin: 0.8rem 0 0.1rem;
    font-size: 1.05rem;
}

.label, .dates, .contact, .level {
    color: var(--muted-color);
}

.keywords li, .profiles li {
    display: inline;
    margin-right: 0.8rem;
}

a {
    color: var(--accent-color);
}
"#;
