// src/application/mod.rs
pub mod clock;
pub mod editor;
pub mod note_deleter;
pub mod note_lister;
pub mod note_store;
pub mod repository;

pub use clock::{Clock, SystemClock};
pub use editor::EditorSession;
pub use note_deleter::{Confirmation, NoteDeleter};
pub use note_lister::list_notes;
pub use note_store::NoteStore;
pub use repository::{NoteRepository, PreferenceRepository};
