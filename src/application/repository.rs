// src/application/repository.rs
use crate::domain::{DomainError, Note, Theme};

pub trait NoteRepository {
    /// Load the stored note collection.
    /// Returns `Ok(None)` when nothing usable is stored yet.
    fn load_notes(&mut self) -> Result<Option<Vec<Note>>, DomainError>;

    /// Overwrite the stored collection with `notes`
    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError>;
}

pub trait PreferenceRepository {
    fn load_theme(&mut self) -> Result<Theme, DomainError>;

    fn save_theme(&mut self, theme: Theme) -> Result<(), DomainError>;
}
