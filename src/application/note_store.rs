// src/application/note_store.rs
use crate::application::{list_notes, Clock, NoteRepository, SystemClock};
use crate::domain::{DomainError, Note, View};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, instrument};

pub const DEMO_TITLE: &str = "Welcome to Notepad";
pub const DEMO_CONTENT: &str = "This is your first note. You can edit or delete it.\n\n\
Features:\n\
- Auto-saving while composing\n\
- Light and dark themes\n\
- Simulated AI summaries\n\
- Favorites";

/// In-memory note collection mirrored to a repository after every mutation
pub struct NoteStore<R: NoteRepository> {
    repository: R,
    clock: Box<dyn Clock>,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteStore<R> {
    pub fn open(repository: R) -> Result<Self, DomainError> {
        Self::open_with_clock(repository, Box::new(SystemClock))
    }

    /// Load the collection, seeding the demo note when storage is empty or unreadable
    pub fn open_with_clock(mut repository: R, clock: Box<dyn Clock>) -> Result<Self, DomainError> {
        let loaded = repository.load_notes()?;
        let seeded = loaded.is_none();
        let notes = match loaded {
            Some(notes) => notes,
            None => {
                let now = clock.now();
                let demo = Note::new(
                    now.timestamp_millis().to_string(),
                    DEMO_TITLE.to_string(),
                    DEMO_CONTENT.to_string(),
                    now,
                );
                vec![demo]
            }
        };

        let mut store = Self {
            repository,
            clock,
            notes,
        };
        if seeded {
            info!("No stored notes, seeding demo note");
            store.persist()?;
        }
        debug!(count = store.notes.len(), "Opened note store");
        Ok(store)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get(&self, id: &str) -> Result<&Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    pub fn list(&self, view: View, search: &str) -> Vec<&Note> {
        list_notes(&self.notes, view, search)
    }

    /// Create a note at the front of the collection.
    /// Returns `None` without touching storage when title and content are both empty.
    #[instrument(level = "debug", skip(self, content))]
    pub fn create(&mut self, title: &str, content: &str) -> Result<Option<Note>, DomainError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() && content.is_empty() {
            debug!("Ignoring empty new note");
            return Ok(None);
        }

        let now = self.clock.now();
        let note = Note::new(
            self.next_id(now),
            title.to_string(),
            content.to_string(),
            now,
        );
        self.notes.insert(0, note.clone());
        self.persist()?;

        info!(note_id = %note.id, "Created note");
        Ok(Some(note))
    }

    /// Replace title and content. Returns `false` if nothing differed.
    #[instrument(level = "debug", skip(self, content))]
    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<bool, DomainError> {
        let title = title.trim();
        let content = content.trim();
        let now = self.clock.now();

        let note = self.find_mut(id)?;
        if note.title == title && note.content == content {
            debug!(note_id = id, "Note unchanged, skipping save");
            return Ok(false);
        }
        note.title = title.to_string();
        note.content = content.to_string();
        note.updated_at = advance(note.updated_at, now);
        self.persist()?;

        info!(note_id = id, "Updated note");
        Ok(true)
    }

    /// Flip the favorite flag and return its new value
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, DomainError> {
        let now = self.clock.now();

        let note = self.find_mut(id)?;
        note.favorite = !note.favorite;
        note.updated_at = advance(note.updated_at, now);
        let favorite = note.favorite;
        self.persist()?;

        info!(note_id = id, favorite, "Toggled favorite");
        Ok(favorite)
    }

    /// Remove a note unconditionally. Interactive callers go through `NoteDeleter`.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<Note, DomainError> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))?;
        let removed = self.notes.remove(index);
        self.persist()?;

        info!(note_id = id, "Deleted note");
        Ok(removed)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Note, DomainError> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.notes.iter().any(|n| n.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn persist(&mut self) -> Result<(), DomainError> {
        self.repository.save_notes(&self.notes)
    }
}

/// Next `updated_at`: the clock reading, or one millisecond past `previous`
/// when the clock has not moved forward.
fn advance(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
