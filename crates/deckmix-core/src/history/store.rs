//! Bounded, age-limited mixing-session history on top of a document store.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;

use crate::config::HistoryConfig;
use crate::deck::DeckId;
use crate::error::{DeckmixError, Result};
use crate::storage::DocumentStore;

use super::model::CardMixingSession;

/// Records and queries mixing sessions stored inside the study document.
///
/// The list is kept most-recent-first. Mutations read the whole document,
/// change the session list and write the document back immediately; storage
/// errors are returned unmodified.
#[derive(Clone)]
pub struct SessionHistoryStore {
    store: Arc<dyn DocumentStore>,
    config: HistoryConfig,
}

impl SessionHistoryStore {
    pub fn new(store: Arc<dyn DocumentStore>, config: HistoryConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Records a mixing request with the current time.
    pub fn record(&self, selected_deck_ids: &[DeckId], card_count: usize) -> Result<CardMixingSession> {
        self.record_at(selected_deck_ids, card_count, Utc::now())
    }

    /// Records a mixing request with an explicit timestamp.
    ///
    /// The new session is placed first and the list is truncated to the
    /// configured maximum, dropping the oldest entries.
    pub fn record_at(
        &self,
        selected_deck_ids: &[DeckId],
        card_count: usize,
        timestamp: DateTime<Utc>,
    ) -> Result<CardMixingSession> {
        self.config.validate()?;
        let session = CardMixingSession::new(selected_deck_ids.to_vec(), card_count, timestamp);

        let mut document = self.store.read()?;
        document.mixing_sessions.insert(0, session.clone());
        let dropped = document
            .mixing_sessions
            .len()
            .saturating_sub(self.config.max_sessions);
        document.mixing_sessions.truncate(self.config.max_sessions);
        self.store.write(&document)?;

        tracing::info!(
            session_id = %session.id,
            decks = session.selected_deck_ids.len(),
            card_count,
            dropped,
            "Recorded mixing session"
        );
        Ok(session)
    }

    /// Removes sessions older than the retention period, measured from now.
    ///
    /// Returns the number of removed sessions.
    pub fn cleanup(&self) -> Result<usize> {
        self.cleanup_at(Utc::now())
    }

    /// Removes sessions older than the retention period, measured from `now`.
    pub fn cleanup_at(&self, now: DateTime<Utc>) -> Result<usize> {
        self.config.validate()?;
        let cutoff = TimeDelta::try_days(self.config.retention_days)
            .and_then(|retention| now.checked_sub_signed(retention))
            .ok_or_else(|| {
                DeckmixError::config(format!(
                    "retention of {} days is out of range",
                    self.config.retention_days
                ))
            })?;

        let mut document = self.store.read()?;
        let before = document.mixing_sessions.len();
        document
            .mixing_sessions
            .retain(|session| session.timestamp >= cutoff);
        let removed = before - document.mixing_sessions.len();
        self.store.write(&document)?;

        if removed > 0 {
            tracing::info!(removed, %cutoff, "Cleaned up expired mixing sessions");
        } else {
            tracing::debug!(%cutoff, "No expired mixing sessions");
        }
        Ok(removed)
    }

    /// Returns up to `limit` sessions, most recent first. Never writes.
    pub fn recent(&self, limit: usize) -> Result<Vec<CardMixingSession>> {
        let mut sessions = self.store.read()?.mixing_sessions;
        sessions.truncate(limit);
        Ok(sessions)
    }

    /// [`recent`](Self::recent) with the configured default limit.
    pub fn recent_default(&self) -> Result<Vec<CardMixingSession>> {
        self.recent(self.config.recent_limit)
    }

    /// Returns every stored session, most recent first.
    pub fn all(&self) -> Result<Vec<CardMixingSession>> {
        Ok(self.store.read()?.mixing_sessions)
    }

    pub fn find(&self, session_id: &str) -> Result<Option<CardMixingSession>> {
        Ok(self
            .store
            .read()?
            .mixing_sessions
            .into_iter()
            .find(|session| session.id == session_id))
    }

    /// Removes one session by identifier.
    ///
    /// Returns `false` when no session had that identifier.
    pub fn delete(&self, session_id: &str) -> Result<bool> {
        let mut document = self.store.read()?;
        let before = document.mixing_sessions.len();
        document
            .mixing_sessions
            .retain(|session| session.id != session_id);
        let removed = document.mixing_sessions.len() < before;
        self.store.write(&document)?;

        tracing::debug!(session_id, removed, "Deleted mixing session");
        Ok(removed)
    }
}
