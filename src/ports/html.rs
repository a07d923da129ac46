// src/ports/html.rs
use crate::domain::{Note, Summary, Theme};
use html_escape::encode_text;
use pulldown_cmark::{html, Event, Options, Parser};
use tracing::instrument;

const LIGHT_VARS: &str = "--bg: #f5f5f5; --card: #ffffff; --fg: #1c1b1f; --muted: #666666; --accent: #6750a4;";
const DARK_VARS: &str = "--bg: #141218; --card: #211f26; --fg: #e6e0e9; --muted: #a09aa8; --accent: #d0bcff;";

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    theme: Theme,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render markdown content; raw HTML in the note is shown as text
    #[instrument(level = "trace", ret)]
    fn process_content(&self, content: &str) -> String {
        let parser =
            Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            });
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }

    fn theme_css(&self) -> String {
        match self.theme {
            Theme::Light => format!(":root {{ {} }}", LIGHT_VARS),
            Theme::Dark => format!(":root {{ {} }}", DARK_VARS),
            Theme::System => format!(
                ":root {{ {} }}\n        @media (prefers-color-scheme: dark) {{ :root {{ {} }} }}",
                LIGHT_VARS, DARK_VARS
            ),
        }
    }

    fn render_summary(&self, summary: &Summary) -> String {
        if summary.is_empty() {
            return "<p>No content to summarize.</p>".to_string();
        }
        let points: String = summary
            .key_points
            .iter()
            .map(|p| format!("<li>{}</li>", encode_text(p)))
            .collect();
        format!(
            r#"<p><strong>Summary:</strong> {}</p>
            <p><strong>Key Points:</strong></p>
            <ul>{}</ul>
            <p><em>Note: This is a simulated summary, no AI service was contacted.</em></p>"#,
            encode_text(&summary.headline()),
            points
        )
    }

    pub fn render(&self, note: &Note, summary: Option<&Summary>) -> String {
        let title = encode_text(note.display_title());
        let content = if note.content.is_empty() {
            "<p class=\"muted\">No content</p>".to_string()
        } else {
            self.process_content(&note.content)
        };
        let summary_html = summary
            .map(|s| format!(r#"<div class="summary">{}</div>"#, self.render_summary(s)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        {theme_css}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: var(--bg);
            color: var(--fg);
        }}
        .card {{
            background: var(--card);
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .favorite {{
            color: var(--accent);
        }}
        .summary {{
            margin-top: 1.5rem;
            padding: 1rem;
            border-left: 4px solid var(--accent);
        }}
        .note-info, .muted {{
            font-size: 0.9em;
            color: var(--muted);
        }}
        .note-info {{
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid var(--muted);
        }}
    </style>
</head>
<body>
    <div class="card">
        <h1>{title}{favorite}</h1>
        <div class="content">{content}</div>
        {summary}
        <div class="note-info">
            <div>Note ID: {note_id}</div>
            <div>Created: {created}</div>
            <div>Updated: {updated}</div>
        </div>
    </div>
</body>
</html>"#,
            theme = self.theme,
            theme_css = self.theme_css(),
            title = title,
            favorite = if note.favorite {
                r#" <span class="favorite">♥</span>"#
            } else {
                ""
            },
            content = content,
            summary = summary_html,
            note_id = encode_text(&note.id),
            created = note.created_at.format("%Y-%m-%d %H:%M"),
            updated = note.updated_at.format("%Y-%m-%d %H:%M"),
        )
    }
}
