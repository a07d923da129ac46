// src/ports/text.rs
use crate::constants::PREVIEW_WIDTH;
use crate::domain::Note;
use crate::util::text::{preview, truncate};
use std::fmt::Write;

const TITLE_WIDTH: usize = 28;

/// Plain-text rendering for the terminal
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One line per note: id, favorite marker, title, date, content preview
    pub fn render_list(&self, notes: &[&Note]) -> String {
        if notes.is_empty() {
            return "No notes found\n".to_string();
        }
        let mut out = String::new();
        for note in notes {
            let _ = writeln!(
                out,
                "{id:<14} {fav} {title:<width$}  {date}  {preview}",
                id = note.id,
                fav = if note.favorite { '♥' } else { ' ' },
                title = truncate(note.display_title(), TITLE_WIDTH),
                width = TITLE_WIDTH,
                date = note.updated_at.format("%Y-%m-%d"),
                preview = preview(&note.content, PREVIEW_WIDTH),
            );
        }
        out
    }

    pub fn render_detail(&self, note: &Note) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}{}",
            note.display_title(),
            if note.favorite { " ♥" } else { "" }
        );
        let _ = writeln!(out, "id: {}", note.id);
        let _ = writeln!(out, "created: {}", note.created_at.to_rfc3339());
        let _ = writeln!(out, "updated: {}", note.updated_at.to_rfc3339());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", note.content);
        out
    }
}
