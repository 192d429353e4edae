//! Store-backed card mixing.
//!
//! Ties the mixing algorithms to the study document: cards and decks are read
//! from the injected store, and successful mixes are recorded in the session
//! history on a best-effort basis.

use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use deckmix_core::DeckmixError;
use deckmix_core::config::HistoryConfig;
use deckmix_core::deck::DeckId;
use deckmix_core::error::Result;
use deckmix_core::history::{CardMixingSession, SessionHistoryStore};
use deckmix_core::mixing::{GridLayout, MixedCard, calculate_grid_layout, mix_cards_with};
use deckmix_core::storage::DocumentStore;

/// Result of a successful mix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixOutcome {
    pub cards: Vec<MixedCard>,
    pub layout: GridLayout,
    /// History entry written for this mix; `None` when recording was skipped
    /// or failed.
    pub session: Option<CardMixingSession>,
}

/// Application service for mixing cards out of the stored library.
pub struct MixingService {
    store: Arc<dyn DocumentStore>,
    history: SessionHistoryStore,
}

impl MixingService {
    pub fn new(store: Arc<dyn DocumentStore>, config: HistoryConfig) -> Self {
        let history = SessionHistoryStore::new(store.clone(), config);
        Self { store, history }
    }

    pub fn history(&self) -> &SessionHistoryStore {
        &self.history
    }

    /// Drops expired history entries. Meant to run once per application start.
    pub fn startup(&self) -> Result<usize> {
        self.history.cleanup()
    }

    /// Mixes `card_count` cards from the selected decks.
    ///
    /// When `record` is set the request is added to the history. A failure to
    /// record is logged and does not fail the mix.
    pub fn mix(&self, deck_ids: &[DeckId], card_count: i64, record: bool) -> Result<MixOutcome> {
        self.mix_with(deck_ids, card_count, record, &mut rand::thread_rng())
    }

    /// Same as [`mix`](Self::mix) with an explicit random source.
    pub fn mix_with<R: Rng + ?Sized>(
        &self,
        deck_ids: &[DeckId],
        card_count: i64,
        record: bool,
        rng: &mut R,
    ) -> Result<MixOutcome> {
        let document = self.store.read()?;
        let cards = mix_cards_with(deck_ids, card_count, &document.cards, &document.decks, rng)?;
        let layout = calculate_grid_layout(cards.len());

        let session = if record {
            match self.history.record(deck_ids, cards.len()) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!("Failed to record mixing session: {}", e);
                    None
                }
            }
        } else {
            None
        };

        tracing::info!(
            decks = deck_ids.len(),
            cards = cards.len(),
            rows = layout.rows,
            cols = layout.cols,
            "Mixed cards"
        );

        Ok(MixOutcome {
            cards,
            layout,
            session,
        })
    }

    /// Repeats the draw configuration of a recorded session.
    ///
    /// Decks deleted since the session was recorded are skipped; if none is
    /// left the mix fails with `NoDecksSelected`.
    pub fn replay(&self, session_id: &str, record: bool) -> Result<MixOutcome> {
        let session = self
            .history
            .find(session_id)?
            .ok_or_else(|| DeckmixError::not_found("mixing session", session_id))?;

        let document = self.store.read()?;
        let deck_ids = session.existing_deck_ids(|id| document.has_deck(id));
        if deck_ids.len() < session.selected_deck_ids.len() {
            tracing::debug!(
                session_id,
                recorded = session.selected_deck_ids.len(),
                remaining = deck_ids.len(),
                "Skipping deleted decks in replayed session"
            );
        }

        let card_count = i64::try_from(session.card_count)
            .map_err(|e| DeckmixError::internal(format!("stored card count out of range: {e}")))?;
        self.mix(&deck_ids, card_count, record)
    }
}
