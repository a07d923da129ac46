// src/infrastructure/storage_repository.rs
use crate::application::{NoteRepository, PreferenceRepository};
use crate::constants::{NOTES_KEY, THEME_KEY};
use crate::domain::{DomainError, Note, Theme};
use crate::infrastructure::LocalStorage;
use tracing::{debug, instrument, warn};

/// Note collection stored as a JSON array under the `notes` key
pub struct StorageNoteRepository {
    storage: LocalStorage,
}

impl StorageNoteRepository {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }
}

impl NoteRepository for StorageNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn load_notes(&mut self) -> Result<Option<Vec<Note>>, DomainError> {
        let raw = self
            .storage
            .get_item(NOTES_KEY)
            .map_err(|e| DomainError::Storage(format!("{:#}", e)))?;

        let Some(raw) = raw else {
            debug!("No notes stored yet");
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                debug!(count = notes.len(), "Loaded notes");
                Ok(Some(notes))
            }
            Err(e) => {
                warn!(error = %e, "Stored notes are unreadable, starting over");
                Ok(None)
            }
        }
    }

    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        let json = serde_json::to_string(notes)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize notes: {}", e)))?;

        self.storage
            .set_item(NOTES_KEY, &json)
            .map_err(|e| DomainError::Storage(format!("{:#}", e)))
    }
}

/// Theme preference stored as a plain string under the `theme` key
pub struct StoragePreferences {
    storage: LocalStorage,
}

impl StoragePreferences {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }
}

impl PreferenceRepository for StoragePreferences {
    fn load_theme(&mut self) -> Result<Theme, DomainError> {
        let raw = self
            .storage
            .get_item(THEME_KEY)
            .map_err(|e| DomainError::Storage(format!("{:#}", e)))?;

        Ok(match raw {
            None => Theme::default(),
            Some(value) => value.parse::<Theme>().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring stored theme");
                Theme::default()
            }),
        })
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), DomainError> {
        self.storage
            .set_item(THEME_KEY, theme.as_str())
            .map_err(|e| DomainError::Storage(format!("{:#}", e)))
    }
}
