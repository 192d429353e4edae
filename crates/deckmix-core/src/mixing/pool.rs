//! Flattening of selected decks into one candidate pool.

use crate::deck::{AllCards, Card, DeckId};

/// Concatenates the card lists of `selected_deck_ids` in selection order.
///
/// Unknown deck identifiers contribute nothing. A deck selected twice
/// contributes its cards twice.
pub fn combine_cards(selected_deck_ids: &[DeckId], all_cards: &AllCards) -> Vec<Card> {
    let mut pool = Vec::with_capacity(available_count(selected_deck_ids, all_cards));
    for deck_id in selected_deck_ids {
        if let Some(cards) = all_cards.get(deck_id) {
            pool.extend(cards.iter().cloned());
        }
    }
    pool
}

/// Length of the pool [`combine_cards`] would build, without cloning cards.
pub fn available_count(selected_deck_ids: &[DeckId], all_cards: &AllCards) -> usize {
    selected_deck_ids
        .iter()
        .map(|deck_id| all_cards.get(deck_id).map_or(0, Vec::len))
        .sum()
}
