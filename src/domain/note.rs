// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
}

impl Note {
    pub fn new(id: String, title: String, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
            favorite: false,
        }
    }

    /// Title shown to the user; empty titles read as "Untitled"
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Case-insensitive substring match against title or content.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// `2024-01-01T12:00:00.000Z`, the format browsers produce for stored notes
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

/// List filter mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    All,
    Favorites,
}

impl View {
    pub fn admits(&self, note: &Note) -> bool {
        match self {
            View::All => true,
            View::Favorites => note.favorite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note(title: &str, content: &str) -> Note {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Note::new("1".to_string(), title.to_string(), content.to_string(), now)
    }

    #[test]
    fn given_empty_title_when_displaying_then_returns_untitled() {
        assert_eq!(note("", "body").display_title(), "Untitled");
        assert_eq!(note("Groceries", "").display_title(), "Groceries");
    }

    #[test]
    fn given_mixed_case_text_when_matching_then_ignores_case() {
        let n = note("Shopping List", "Buy MILK");

        assert!(n.matches("shopping"));
        assert!(n.matches("milk"));
        assert!(n.matches(""));
        assert!(!n.matches("bread"));
    }

    #[test]
    fn given_favorites_view_when_admitting_then_only_favorites_pass() {
        let mut n = note("a", "b");
        assert!(View::All.admits(&n));
        assert!(!View::Favorites.admits(&n));

        n.favorite = true;
        assert!(View::Favorites.admits(&n));
    }

    #[test]
    fn given_whole_second_timestamp_when_serializing_then_keeps_millisecond_fraction() {
        let json = serde_json::to_string(&note("a", "b")).unwrap();

        assert!(json.contains(r#""createdAt":"2024-01-01T12:00:00.000Z""#));
        assert!(json.contains(r#""updatedAt":"2024-01-01T12:00:00.000Z""#));
    }

    #[test]
    fn given_offset_timestamp_when_deserializing_then_converts_to_utc() {
        let json = r#"{"id":"1","createdAt":"2024-01-01T13:00:00.250+01:00","updatedAt":"2024-01-01T12:00:00.250Z"}"#;

        let n: Note = serde_json::from_str(json).unwrap();

        assert_eq!(n.created_at, n.updated_at);
    }

    #[test]
    fn given_new_note_when_created_then_timestamps_are_equal() {
        let n = note("a", "b");

        assert_eq!(n.created_at, n.updated_at);
        assert!(!n.favorite);
    }
}
