//! Pre-sampling checks for mixing requests.

use crate::deck::{AllCards, DeckId};
use crate::error::MixError;

use super::pool::available_count;

/// Checks a mixing request before any sampling happens.
///
/// Checks run in order and the first failure wins: empty selection,
/// non-positive count, empty pool, count above the pool size.
pub fn validate_mix_request(
    selected_deck_ids: &[DeckId],
    requested_count: i64,
    all_cards: &AllCards,
) -> Result<(), MixError> {
    if selected_deck_ids.is_empty() {
        return Err(MixError::NoDecksSelected);
    }

    if requested_count <= 0 {
        return Err(MixError::InvalidCount {
            requested: requested_count,
        });
    }

    let available = available_count(selected_deck_ids, all_cards);
    if available == 0 {
        return Err(MixError::EmptyDecks);
    }

    let exceeds = usize::try_from(requested_count).map_or(true, |count| count > available);
    if exceeds {
        return Err(MixError::InsufficientCards {
            requested: requested_count,
            max_available: available,
        });
    }

    Ok(())
}
