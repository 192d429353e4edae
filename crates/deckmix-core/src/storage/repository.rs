//! Document store trait.

use crate::error::Result;

use super::document::StudyDocument;

/// Persistence boundary for the study document.
///
/// Implementations read and write the whole document at once. Callers that
/// mutate part of it perform a full read-modify-write; there is no version
/// check between the read and the write.
pub trait DocumentStore: Send + Sync {
    /// Reads the current document.
    ///
    /// A store that has never been written returns an empty document.
    fn read(&self) -> Result<StudyDocument>;

    /// Replaces the stored document.
    fn write(&self, document: &StudyDocument) -> Result<()>;
}
