//! HTML page generator.
//!
//! Renders the registration form and the participant list as a static page
//! with all CSS inlined. The page is a snapshot of the app state; its buttons
//! carry the participant id but are not wired to anything.

use anyhow::{Context, Result};
use std::path::Path;

use kangoo_core::accent::Accent;
use kangoo_core::form::FormField;
use kangoo_core::labels;
use kangoo_core::model::{Club, Day, Participant, ShoeSize};
use kangoo_core::ParticipantApp;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the registration page for the current app state.
pub fn generate_html(app: &ParticipantApp) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(labels::TITLE)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(&format!("<h1>{}</h1>\n", html_escape(labels::TITLE)));

    html.push_str(&render_form(app));

    html.push_str(&format!("<h2>{}</h2>\n", html_escape(labels::LIST_HEADING)));
    html.push_str("<ul class=\"participants\">\n");
    for participant in app.participants() {
        html.push_str(&render_participant(participant));
    }
    html.push_str("</ul>\n");

    html.push_str(&format!(
        "<footer class=\"meta\">{}</footer>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    html.push_str("</main>\n</body>\n</html>");
    html
}

/// Write the registration page to a file.
pub fn write_html_page(app: &ParticipantApp, path: &Path) -> Result<()> {
    let html = generate_html(app);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write page to {}", path.display()))?;
    Ok(())
}

fn render_form(app: &ParticipantApp) -> String {
    let form = app.form();
    let fields = form.fields();
    let mut html = String::new();

    let form_class = if form.is_editing() { "editing" } else { "adding" };
    html.push_str(&format!("<form class=\"{form_class}\">\n"));

    for field in FormField::ALL {
        html.push_str("<div class=\"field\">\n");
        html.push_str(&format!(
            "<label for=\"{field}\">{}</label>\n",
            html_escape(field.label())
        ));
        match field {
            FormField::FirstName | FormField::LastName => {
                html.push_str(&format!(
                    "<input id=\"{field}\" type=\"text\" value=\"{}\">\n",
                    html_escape(&form.value(field))
                ));
            }
            FormField::ShoeSize => {
                let options: Vec<(&str, &str)> = ShoeSize::OPTIONS
                    .iter()
                    .map(|s| (s.as_str(), s.as_str()))
                    .collect();
                html.push_str(&render_select(
                    field,
                    labels::CHOOSE_SHOE_SIZE,
                    &options,
                    fields.shoe_size.as_str(),
                ));
            }
            FormField::Club => {
                let options: Vec<(&str, &str)> =
                    Club::OPTIONS.iter().map(|c| (c.as_str(), c.as_str())).collect();
                html.push_str(&render_select(
                    field,
                    labels::CHOOSE_CLUB,
                    &options,
                    fields.club.as_str(),
                ));
            }
            FormField::Day => {
                let options: Vec<(&str, &str)> =
                    Day::OPTIONS.iter().map(|d| (d.as_str(), d.label())).collect();
                html.push_str(&render_select(
                    field,
                    labels::CHOOSE_DAY,
                    &options,
                    fields.day.as_str(),
                ));
            }
        }
        html.push_str("</div>\n");
    }

    html.push_str(&format!(
        "<button type=\"button\" class=\"primary\">{}</button>\n",
        html_escape(form.submit_label())
    ));
    html.push_str("</form>\n");
    html
}

/// `options` are `(value, text)` pairs; an empty placeholder option comes first.
fn render_select(
    field: FormField,
    placeholder: &str,
    options: &[(&str, &str)],
    current: &str,
) -> String {
    let mut html = format!("<select id=\"{field}\">\n");
    let selected = |value: &str| if value == current { " selected" } else { "" };
    html.push_str(&format!(
        "<option value=\"\"{}>{}</option>\n",
        selected(""),
        html_escape(placeholder)
    ));
    for &(value, text) in options {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            html_escape(value),
            selected(value),
            html_escape(text)
        ));
    }
    html.push_str("</select>\n");
    html
}

fn accented(text: &str, accent: Option<Accent>) -> String {
    match accent {
        Some(a) => format!("<span class=\"{}\">{}</span>", a.css_class(), html_escape(text)),
        None => format!("<span>{}</span>", html_escape(text)),
    }
}

fn render_participant(p: &Participant) -> String {
    let f = &p.fields;
    let mut html = format!("<li data-id=\"{}\">\n", p.id);
    html.push_str(&format!(
        "<span class=\"name\">{}</span>\n",
        html_escape(&f.full_name())
    ));
    html.push_str(&format!(
        "<span>{}: {}</span>\n",
        html_escape(labels::CLUB),
        accented(f.club.as_str(), f.club.accent())
    ));
    html.push_str(&format!(
        "<span>{}: {}</span>\n",
        html_escape(labels::DAY),
        accented(f.day.label(), f.day.accent())
    ));
    html.push_str(&format!(
        "<span>{}: {}</span>\n",
        html_escape(labels::SHOE_SIZE),
        html_escape(f.shoe_size.as_str())
    ));
    html.push_str(&format!(
        "<button type=\"button\" class=\"primary\" data-action=\"edit\" data-id=\"{}\">{}</button>\n",
        p.id,
        html_escape(labels::EDIT)
    ));
    html.push_str(&format!(
        "<button type=\"button\" class=\"danger\" data-action=\"delete\" data-id=\"{}\">{}</button>\n",
        p.id,
        html_escape(labels::DELETE)
    ));
    html.push_str("</li>\n");
    html
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #374151; --field: #e5e7eb; --border: #e5e7eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --field: #374151; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 1rem; background: var(--bg); color: var(--fg); }
main { max-width: 56rem; margin: 0 auto; }
h1 { font-size: 1.875rem; font-weight: bold; margin-bottom: 1rem; }
h2 { font-size: 1.5rem; font-weight: bold; margin-bottom: 1rem; }
form { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem; }
.field { flex: 1 1 45%; }
label, li span { display: block; text-transform: uppercase; letter-spacing: 0.05em; font-size: 0.75rem; font-weight: bold; margin-bottom: 0.5rem; }
li span span { display: inline; }
input, select { display: block; width: 100%; background: var(--field); border: 1px solid var(--border); border-radius: 4px; padding: 0.75rem 1rem; }
button { color: #fff; font-weight: bold; padding: 0.5rem 1rem; border: 0; border-radius: 4px; margin-right: 0.25rem; }
.primary { background: #3b82f6; }
.danger { background: #ef4444; }
ul { list-style: none; padding: 0; }
li { margin-bottom: 1rem; }
.text-blue { color: #3b82f6; }
.text-green { color: #22c55e; }
.text-red { color: #ef4444; }
.text-orange { color: #f97316; }
.text-purple { color: #a855f7; }
.meta { color: #6b7280; font-size: 0.75rem; }
"#;
