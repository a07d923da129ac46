// src/application/editor.rs
use crate::application::{NoteRepository, NoteStore};
use crate::domain::DomainError;
use std::time::{Duration, Instant};
use tracing::debug;

/// Draft of a single note with debounced auto-save.
///
/// Every edit restarts the debounce window; `poll` saves once the window
/// has elapsed and `leave` flushes immediately.
#[derive(Debug)]
pub struct EditorSession {
    note_id: Option<String>,
    title: String,
    content: String,
    delay: Duration,
    due: Option<Instant>,
}

impl EditorSession {
    pub fn new_note(delay: Duration) -> Self {
        Self {
            note_id: None,
            title: String::new(),
            content: String::new(),
            delay,
            due: None,
        }
    }

    pub fn open<R: NoteRepository>(
        store: &NoteStore<R>,
        note_id: &str,
        delay: Duration,
    ) -> Result<Self, DomainError> {
        let note = store.get(note_id)?;
        Ok(Self {
            note_id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            delay,
            due: None,
        })
    }

    pub fn note_id(&self) -> Option<&str> {
        self.note_id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn edit(&mut self, title: &str, content: &str, now: Instant) {
        self.title = title.to_string();
        self.content = content.to_string();
        self.schedule(now);
    }

    pub fn set_title(&mut self, title: &str, now: Instant) {
        self.title = title.to_string();
        self.schedule(now);
    }

    pub fn append_line(&mut self, line: &str, now: Instant) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(line);
        self.schedule(now);
    }

    /// Save if the debounce window has elapsed. Returns whether anything was written.
    pub fn poll<R: NoteRepository>(
        &mut self,
        store: &mut NoteStore<R>,
        now: Instant,
    ) -> Result<bool, DomainError> {
        match self.due {
            Some(due) if now >= due => self.save(store),
            _ => Ok(false),
        }
    }

    /// Explicit save; cancels any pending auto-save
    pub fn save<R: NoteRepository>(
        &mut self,
        store: &mut NoteStore<R>,
    ) -> Result<bool, DomainError> {
        self.due = None;
        if let Some(id) = &self.note_id {
            return store.update(id, &self.title, &self.content);
        }
        match store.create(&self.title, &self.content)? {
            Some(note) => {
                debug!(note_id = %note.id, "Editor session now tracks created note");
                self.note_id = Some(note.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Navigate away: flush immediately and hand back the tracked note id
    pub fn leave<R: NoteRepository>(
        mut self,
        store: &mut NoteStore<R>,
    ) -> Result<Option<String>, DomainError> {
        self.save(store)?;
        Ok(self.note_id)
    }

    fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{ManualClock, MockNoteRepository};

    const DELAY: Duration = Duration::from_millis(1000);

    fn empty_store() -> NoteStore<MockNoteRepository> {
        let repo = MockNoteRepository::builder().with_notes(vec![]).build();
        NoteStore::open_with_clock(repo, Box::new(ManualClock::default())).unwrap()
    }

    #[test]
    fn given_edit_within_delay_when_polling_then_does_not_save() {
        // Arrange
        let mut store = empty_store();
        let mut session = EditorSession::new_note(DELAY);
        let start = Instant::now();

        // Act
        session.edit("Title", "Body", start);
        let saved = session
            .poll(&mut store, start + Duration::from_millis(999))
            .unwrap();

        // Assert
        assert!(!saved);
        assert!(session.is_pending());
        assert!(store.notes().is_empty());
    }

    #[test]
    fn given_elapsed_delay_when_polling_then_creates_note_and_tracks_it() {
        let mut store = empty_store();
        let mut session = EditorSession::new_note(DELAY);
        let start = Instant::now();

        session.edit("Title", "Body", start);
        let saved = session.poll(&mut store, start + DELAY).unwrap();

        assert!(saved);
        assert!(!session.is_pending());
        assert_eq!(store.notes().len(), 1);
        assert_eq!(session.note_id(), Some(store.notes()[0].id.as_str()));
    }

    #[test]
    fn given_repeated_edits_when_polling_then_debounce_restarts() {
        let mut store = empty_store();
        let mut session = EditorSession::new_note(DELAY);
        let start = Instant::now();

        session.append_line("one", start);
        session.append_line("two", start + Duration::from_millis(800));
        let saved = session
            .poll(&mut store, start + Duration::from_millis(1200))
            .unwrap();

        assert!(!saved);
        assert!(session
            .poll(&mut store, start + Duration::from_millis(1800))
            .unwrap());
        assert_eq!(store.notes()[0].content, "one\ntwo");
    }

    #[test]
    fn given_pending_edit_when_leaving_then_saves_immediately() {
        let mut store = empty_store();
        let mut session = EditorSession::new_note(DELAY);

        session.edit("Quick", "", Instant::now());
        let id = session.leave(&mut store).unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(id.as_deref(), Some(store.notes()[0].id.as_str()));
    }

    #[test]
    fn given_empty_new_note_when_leaving_then_nothing_is_stored() {
        let mut store = empty_store();
        let session = EditorSession::new_note(DELAY);

        let id = session.leave(&mut store).unwrap();

        assert!(id.is_none());
        assert!(store.notes().is_empty());
    }

    #[test]
    fn given_existing_note_when_editing_then_updates_in_place() {
        let mut store = empty_store();
        let created = store.create("Title", "Body").unwrap().unwrap();
        let mut session = EditorSession::open(&store, &created.id, DELAY).unwrap();
        assert_eq!(session.content(), "Body");

        session.append_line("More", Instant::now());
        session.leave(&mut store).unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].content, "Body\nMore");
    }
}
