//! Deck and card domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Identifier of a deck.
pub type DeckId = String;

/// All cards of the library, keyed by owning deck.
pub type AllCards = HashMap<DeckId, Vec<Card>>;

/// All deck metadata of the library, keyed by deck identifier.
pub type AllDecks = HashMap<DeckId, Deck>;

/// Display colors offered when creating a deck.
pub const DECK_COLOR_PALETTE: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
];

/// Name shown for cards whose deck no longer exists.
pub const UNKNOWN_DECK_NAME: &str = "Unknown Deck";

/// Neutral gray shown for cards whose deck no longer exists.
pub const FALLBACK_DECK_COLOR: &str = "#6b7280";

/// A front/back text pair belonging to exactly one deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique card identifier (UUID format)
    pub id: String,
    /// Identifier of the owning deck
    pub deck_id: DeckId,
    pub front: String,
    pub back: String,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card with a fresh identifier.
    pub fn new(
        deck_id: impl Into<DeckId>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            deck_id: deck_id.into(),
            front: front.into(),
            back: back.into(),
            created_at: Utc::now(),
        }
    }
}

/// A named, colored collection of cards.
///
/// `card_count` is a cached value kept in sync by the library; capacity
/// checks read the card lists directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Unique deck identifier
    pub id: DeckId,
    /// Display name
    pub name: String,
    /// Display color (palette entry or any CSS color string)
    pub color: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub card_count: usize,
}

impl Deck {
    /// Creates a new empty deck with a fresh identifier.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            created_at: Utc::now(),
            card_count: 0,
        }
    }

    /// Creates a deck with a caller-chosen identifier.
    pub fn with_id(
        id: impl Into<DeckId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            ..Self::new(name, color)
        }
    }
}
