// src/infrastructure/mod.rs
pub mod config;
pub mod local_storage;
pub mod prompt;
pub mod renderer;
pub mod storage_repository;

pub use config::Config;
pub use local_storage::LocalStorage;
pub use prompt::{AssumeYes, PromptConfirmation};
pub use storage_repository::{StorageNoteRepository, StoragePreferences};
