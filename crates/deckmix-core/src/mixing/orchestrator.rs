//! Validated, decorated random draws across decks.

use rand::Rng;

use crate::deck::{AllCards, AllDecks, Card, DeckId, FALLBACK_DECK_COLOR, UNKNOWN_DECK_NAME};
use crate::error::MixError;

use super::model::MixedCard;
use super::pool::combine_cards;
use super::sampler::select_random_with;
use super::validator::validate_mix_request;

/// Draws `requested_count` cards at random from the selected decks.
///
/// Validation failures are returned verbatim and no partial result is
/// produced. Each drawn card carries its deck's name and color, or
/// [`UNKNOWN_DECK_NAME`] / [`FALLBACK_DECK_COLOR`] when the deck is missing
/// from `all_decks`.
pub fn mix_cards(
    selected_deck_ids: &[DeckId],
    requested_count: i64,
    all_cards: &AllCards,
    all_decks: &AllDecks,
) -> Result<Vec<MixedCard>, MixError> {
    mix_cards_with(
        selected_deck_ids,
        requested_count,
        all_cards,
        all_decks,
        &mut rand::thread_rng(),
    )
}

/// Same as [`mix_cards`] with an explicit random source.
pub fn mix_cards_with<R: Rng + ?Sized>(
    selected_deck_ids: &[DeckId],
    requested_count: i64,
    all_cards: &AllCards,
    all_decks: &AllDecks,
    rng: &mut R,
) -> Result<Vec<MixedCard>, MixError> {
    validate_mix_request(selected_deck_ids, requested_count, all_cards)?;

    let count = usize::try_from(requested_count).map_err(|e| {
        MixError::Unexpected(format!("card count {requested_count} is out of range: {e}"))
    })?;

    let pool = combine_cards(selected_deck_ids, all_cards);
    tracing::debug!(
        decks = selected_deck_ids.len(),
        pool_size = pool.len(),
        count,
        "Drawing mixed cards"
    );

    let drawn = select_random_with(&pool, count, rng);
    if drawn.len() != count {
        return Err(MixError::Unexpected(format!(
            "drew {} cards from a pool of {} but {} were requested",
            drawn.len(),
            pool.len(),
            count
        )));
    }

    Ok(drawn
        .into_iter()
        .enumerate()
        .map(|(position, card)| decorate(card, position, all_decks))
        .collect())
}

fn decorate(card: Card, position: usize, all_decks: &AllDecks) -> MixedCard {
    let (deck_name, deck_color) = match all_decks.get(&card.deck_id) {
        Some(deck) => (deck.name.clone(), deck.color.clone()),
        None => (UNKNOWN_DECK_NAME.to_string(), FALLBACK_DECK_COLOR.to_string()),
    };
    MixedCard {
        card,
        deck_name,
        deck_color,
        position,
    }
}
