//! Deck and card domain models.
//!
//! Decks and cards are owned by the study library; the mixing subsystem only
//! reads them through flat identifier-keyed maps.

mod model;

pub use model::{
    AllCards, AllDecks, Card, DECK_COLOR_PALETTE, Deck, DeckId, FALLBACK_DECK_COLOR,
    UNKNOWN_DECK_NAME,
};
