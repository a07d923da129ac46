// src/util/text.rs

const ELLIPSIS: char = '…';

/// First non-empty line of `text`, trimmed.
///
/// # Examples
///
/// ```
/// use notepad::util::text::first_line;
///
/// assert_eq!(first_line("\n  Groceries  \nmilk"), "Groceries");
/// ```
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Shorten `text` to at most `max_chars` characters, ending in an ellipsis when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}

/// One-line preview of note content for list views
pub fn preview(content: &str, max_chars: usize) -> String {
    let line = first_line(content);
    if line.is_empty() {
        return "No content".to_string();
    }
    truncate(line, max_chars)
}
