// src/application/note_deleter.rs
use crate::application::{NoteRepository, NoteStore};
use crate::domain::{DomainError, Note};
use tracing::debug;

/// Asks the user to approve a destructive action
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

pub struct NoteDeleter<C: Confirmation> {
    confirmation: C,
}

impl<C: Confirmation> NoteDeleter<C> {
    pub fn new(confirmation: C) -> Self {
        Self { confirmation }
    }

    /// Delete a note after confirmation.
    /// Returns the removed note, or `None` if the user declined.
    pub fn delete_note<R: NoteRepository>(
        &self,
        store: &mut NoteStore<R>,
        note_id: &str,
    ) -> Result<Option<Note>, DomainError> {
        let title = store.get(note_id)?.display_title().to_string();
        let prompt = format!("Are you sure you want to delete \"{}\"?", title);

        if !self.confirmation.confirm(&prompt) {
            debug!(note_id, "Deletion declined");
            return Ok(None);
        }
        store.remove(note_id).map(Some)
    }
}
