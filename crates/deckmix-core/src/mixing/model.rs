//! Mixing result models.

use serde::{Deserialize, Serialize};

use crate::deck::Card;

/// A card drawn into a mix, decorated with a snapshot of its deck's display
/// attributes and its position in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedCard {
    #[serde(flatten)]
    pub card: Card,
    pub deck_name: String,
    pub deck_color: String,
    /// Zero-based index in the mixed result
    pub position: usize,
}

/// Grid shape used to lay out a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of grid cells, which is at least the card count it was built for.
    ///
    /// Saturates at `usize::MAX` for the largest grids.
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}
