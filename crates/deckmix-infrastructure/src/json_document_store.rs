//! File-backed study document store.
//!
//! The whole document lives in one pretty-printed JSON file. A missing or
//! blank file reads as an empty document.

use std::path::{Path, PathBuf};

use deckmix_core::DeckmixError;
use deckmix_core::error::Result;
use deckmix_core::storage::{DocumentStore, StudyDocument};

use crate::paths::DeckmixPaths;
use crate::storage::AtomicJsonFile;

pub struct JsonDocumentStore {
    file: AtomicJsonFile<StudyDocument>,
}

impl JsonDocumentStore {
    /// Creates a store at the platform default location.
    pub fn new() -> Result<Self> {
        let path = DeckmixPaths::document_file().map_err(|e| DeckmixError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a store at a custom path (overrides and tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl DocumentStore for JsonDocumentStore {
    fn read(&self) -> Result<StudyDocument> {
        match self.file.load()? {
            Some(document) => Ok(document),
            None => {
                tracing::debug!("No study document at {:?}, starting empty", self.path());
                Ok(StudyDocument::default())
            }
        }
    }

    fn write(&self, document: &StudyDocument) -> Result<()> {
        self.file.save(document)?;
        tracing::debug!(
            decks = document.decks.len(),
            sessions = document.mixing_sessions.len(),
            "Wrote study document to {:?}",
            self.path()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckmix_core::deck::{Card, Deck};
    use deckmix_core::storage::CURRENT_DOCUMENT_VERSION;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_returns_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::with_path(temp_dir.path().join("library.json"));

        let document = store.read().unwrap();
        assert!(document.decks.is_empty());
        assert!(document.mixing_sessions.is_empty());
        assert_eq!(document.version, CURRENT_DOCUMENT_VERSION);
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::with_path(temp_dir.path().join("library.json"));

        let mut document = StudyDocument::new();
        document.put_deck(
            Deck::with_id("d1", "Capitals", "#3b82f6"),
            vec![Card::new("d1", "France", "Paris")],
        );
        store.write(&document).unwrap();

        assert_eq!(store.read().unwrap(), document);
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let store = JsonDocumentStore::with_path(path);

        let err = store.read().unwrap_err();
        assert!(matches!(err, DeckmixError::Serialization { .. }));
    }
}
