//! Mixing session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deck::DeckId;

/// Parameters of a past mix request.
///
/// The deck identifiers are not kept in sync with the library; decks may have
/// been deleted since the session was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMixingSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    pub selected_deck_ids: Vec<DeckId>,
    pub card_count: usize,
    pub timestamp: DateTime<Utc>,
}

impl CardMixingSession {
    /// Creates a session with a fresh identifier.
    pub fn new(selected_deck_ids: Vec<DeckId>, card_count: usize, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            selected_deck_ids,
            card_count,
            timestamp,
        }
    }

    /// Deck identifiers of this session that still satisfy `exists`, in
    /// their recorded order.
    pub fn existing_deck_ids<F>(&self, exists: F) -> Vec<DeckId>
    where
        F: Fn(&str) -> bool,
    {
        self.selected_deck_ids
            .iter()
            .filter(|id| exists(id.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serializes_as_rfc3339() {
        let timestamp = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let session = CardMixingSession::new(vec!["d1".into()], 4, timestamp);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");
        assert_eq!(json["cardCount"], 4);
        assert_eq!(json["selectedDeckIds"][0], "d1");
    }

    #[test]
    fn test_existing_deck_ids_filters_deleted() {
        let session = CardMixingSession::new(
            vec!["a".into(), "gone".into(), "b".into()],
            2,
            Utc::now(),
        );
        let kept = session.existing_deck_ids(|id| id != "gone");
        assert_eq!(kept, vec!["a".to_string(), "b".to_string()]);
    }
}
