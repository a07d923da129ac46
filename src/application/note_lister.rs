// src/application/note_lister.rs
use crate::domain::{Note, View};

/// Filter `notes` by view and search term, newest first.
///
/// # Arguments
/// * `view` - `View::Favorites` keeps only favorite notes
/// * `search` - case-insensitive substring matched against title or content
///
/// Notes with equal `updated_at` keep their collection order.
pub fn list_notes<'a>(notes: &'a [Note], view: View, search: &str) -> Vec<&'a Note> {
    let needle = search.to_lowercase();

    let mut listed: Vec<&Note> = notes
        .iter()
        .filter(|n| view.admits(n))
        .filter(|n| n.matches(&needle))
        .collect();
    listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn note(id: &str, title: &str, content: &str, age_minutes: i64) -> Note {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Note::new(
            id.to_string(),
            title.to_string(),
            content.to_string(),
            base - Duration::minutes(age_minutes),
        )
    }

    #[test]
    fn given_no_search_when_listing_notes_then_returns_all_notes_newest_first() {
        // Arrange
        let notes = vec![
            note("1", "Old", "", 30),
            note("2", "New", "", 0),
            note("3", "Middle", "", 10),
        ];

        // Act
        let result = list_notes(&notes, View::All, "");

        // Assert
        let ids: Vec<&str> = result.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn given_search_query_when_listing_notes_then_returns_filtered_notes() {
        // Arrange
        let notes = vec![note("1", "Foo", "", 0), note("2", "Bar", "", 0)];

        // Act
        let result = list_notes(&notes, View::All, "foo");

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn given_search_query_when_listing_notes_then_matches_content() {
        let notes = vec![
            note("1", "Groceries", "eggs and Milk", 0),
            note("2", "Todo", "call bank", 0),
        ];

        let result = list_notes(&notes, View::All, "MILK");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn given_favorites_view_when_listing_notes_then_skips_non_favorites() {
        let mut fav = note("1", "Keep", "", 5);
        fav.favorite = true;
        let notes = vec![fav, note("2", "Other", "", 0)];

        let result = list_notes(&notes, View::Favorites, "");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn given_favorites_view_and_search_when_listing_then_applies_both() {
        let mut a = note("1", "Foo fav", "", 0);
        a.favorite = true;
        let mut b = note("2", "Bar fav", "", 0);
        b.favorite = true;
        let notes = vec![a, b, note("3", "Foo plain", "", 0)];

        let result = list_notes(&notes, View::Favorites, "foo");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn given_padded_search_when_listing_notes_then_whitespace_is_part_of_the_match() {
        let notes = vec![note("1", "Foo", "", 0), note("2", "foo bar", "", 0)];

        let result = list_notes(&notes, View::All, "foo ");

        let ids: Vec<&str> = result.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn given_whitespace_only_search_when_listing_notes_then_needs_whitespace_in_note() {
        let notes = vec![note("1", "Foo", "", 0), note("2", "foo bar", "", 0)];

        let result = list_notes(&notes, View::All, " ");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn given_no_match_when_listing_notes_then_returns_empty() {
        let notes = vec![note("1", "Foo", "", 0)];

        assert!(list_notes(&notes, View::All, "zzz").is_empty());
    }
}
