//! Domain layer of deckmix: flashcard decks, random card mixing across decks,
//! grid layout sizing and the mixing-session history.

pub mod config;
pub mod deck;
pub mod error;
pub mod history;
pub mod mixing;
pub mod storage;

// Re-export common error types
pub use error::{DeckmixError, MixError};
