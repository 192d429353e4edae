//! In-memory study document store.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use deckmix_core::DeckmixError;
use deckmix_core::error::Result;
use deckmix_core::storage::{DocumentStore, StudyDocument};

/// Keeps the study document in memory.
///
/// Writes can be made to fail to simulate an unavailable or full backend.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    document: Mutex<StudyDocument>,
    fail_writes: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: StudyDocument) -> Self {
        Self {
            document: Mutex::new(document),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the current document.
    pub fn snapshot(&self) -> Result<StudyDocument> {
        self.read()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn read(&self) -> Result<StudyDocument> {
        let document = self
            .document
            .lock()
            .map_err(|e| DeckmixError::data_access(format!("document lock poisoned: {e}")))?;
        Ok(document.clone())
    }

    fn write(&self, document: &StudyDocument) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DeckmixError::data_access("storage unavailable"));
        }
        let mut current = self
            .document
            .lock()
            .map_err(|e| DeckmixError::data_access(format!("document lock poisoned: {e}")))?;
        *current = document.clone();
        Ok(())
    }
}
