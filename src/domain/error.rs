// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Please enter some content to summarize.")]
    EmptyContent,
    #[error("Invalid theme: {0} (expected system, light or dark)")]
    InvalidTheme(String),
}
