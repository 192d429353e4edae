//! The single serialized document holding decks, cards and mixing history.

use serde::{Deserialize, Serialize};

use crate::deck::{AllCards, AllDecks, Card, Deck};
use crate::history::CardMixingSession;

/// Schema version written into new documents.
pub const CURRENT_DOCUMENT_VERSION: &str = "1.0.0";

/// Everything the study library persists.
///
/// `mixing_sessions` is absent in documents written before mixing history
/// existed and loads as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDocument {
    #[serde(default)]
    pub decks: AllDecks,
    #[serde(default)]
    pub cards: AllCards,
    /// Most-recent-first mixing history
    #[serde(default)]
    pub mixing_sessions: Vec<CardMixingSession>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    CURRENT_DOCUMENT_VERSION.to_string()
}

impl Default for StudyDocument {
    fn default() -> Self {
        Self {
            decks: AllDecks::new(),
            cards: AllCards::new(),
            mixing_sessions: Vec::new(),
            version: default_version(),
        }
    }
}

impl StudyDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a deck together with its card list, keeping the
    /// cached card count in sync.
    pub fn put_deck(&mut self, mut deck: Deck, cards: Vec<Card>) {
        deck.card_count = cards.len();
        self.cards.insert(deck.id.clone(), cards);
        self.decks.insert(deck.id.clone(), deck);
    }

    /// Removes a deck and its cards. Mixing sessions referencing it are kept.
    pub fn remove_deck(&mut self, deck_id: &str) -> Option<Deck> {
        self.cards.remove(deck_id);
        self.decks.remove(deck_id)
    }

    pub fn has_deck(&self, deck_id: &str) -> bool {
        self.decks.contains_key(deck_id)
    }
}
