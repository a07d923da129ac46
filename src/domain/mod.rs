// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod summary;
pub mod theme;

pub use error::DomainError;
pub use note::{Note, View};
pub use summary::Summary;
pub use theme::Theme;
