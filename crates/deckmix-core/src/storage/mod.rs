//! Durable study document and the store abstraction that persists it.

mod document;
mod repository;

pub use document::{CURRENT_DOCUMENT_VERSION, StudyDocument};
pub use repository::DocumentStore;
