// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::Cell;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Clock, Confirmation, NoteRepository};
use crate::domain::{DomainError, Note};

/// Build a note whose timestamps are both `at`
pub fn note_at(id: &str, title: &str, content: &str, at: DateTime<Utc>) -> Note {
    Note::new(id.to_string(), title.to_string(), content.to_string(), at)
}

/// In-memory repository for testing the note store
///
/// # Examples
///
/// ```
/// use notepad::util::testing::{note_at, MockNoteRepository};
/// use chrono::Utc;
///
/// let mock = MockNoteRepository::builder()
///     .with_notes(vec![note_at("1", "Title", "Body", Utc::now())])
///     .build();
/// assert_eq!(mock.save_count(), 0);
/// ```
pub struct MockNoteRepository {
    stored: Option<Vec<Note>>,
    save_count: usize,
    fail_saves: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Collection as last written, empty if never written
    pub fn stored(&self) -> Vec<Note> {
        self.stored.clone().unwrap_or_default()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl NoteRepository for MockNoteRepository {
    fn load_notes(&mut self) -> Result<Option<Vec<Note>>, DomainError> {
        Ok(self.stored.clone())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        if self.fail_saves {
            return Err(DomainError::Storage("disk full".to_string()));
        }
        self.stored = Some(notes.to_vec());
        self.save_count += 1;
        Ok(())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    stored: Option<Vec<Note>>,
    fail_saves: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            stored: None,
            fail_saves: false,
        }
    }

    /// Pretend `notes` are already stored; without this the repository starts empty
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.stored = Some(notes);
        self
    }

    /// Make every save fail with a storage error
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            stored: self.stored,
            save_count: 0,
            fail_saves: self.fail_saves,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn advance_millis(&self, millis: i64) {
        self.now.set(self.now.get() + Duration::milliseconds(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::at(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
        )
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Confirmation that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmation(pub bool);

impl Confirmation for FixedConfirmation {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["pulldown_cmark"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_no_stored_notes_when_loading_then_returns_none() {
        let mut mock = MockNoteRepository::builder().build();

        assert!(mock.load_notes().unwrap().is_none());
    }

    #[test]
    fn given_saved_notes_when_loading_then_returns_last_save() {
        let mut mock = MockNoteRepository::builder().build();
        let note = note_at("1", "T", "C", Utc::now());

        mock.save_notes(&[note.clone()]).unwrap();

        assert_eq!(mock.load_notes().unwrap(), Some(vec![note]));
        assert_eq!(mock.save_count(), 1);
    }

    #[test]
    fn given_failing_saves_when_saving_then_returns_storage_error() {
        let mut mock = MockNoteRepository::builder().with_failing_saves().build();

        let result = mock.save_notes(&[]);

        assert!(matches!(result, Err(DomainError::Storage(_))));
    }

    #[test]
    fn given_cloned_manual_clock_when_advancing_then_clones_share_time() {
        let clock = ManualClock::default();
        let other = clock.clone();

        clock.advance_millis(250);

        assert_eq!(other.now(), clock.now());
        assert_eq!(
            clock.now() - ManualClock::default().now(),
            Duration::milliseconds(250)
        );
    }
}
