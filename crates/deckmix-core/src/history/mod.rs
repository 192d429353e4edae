//! Mixing-session history.
//!
//! Keeps the parameters of recent mixes so a user can repeat a previous
//! draw configuration. The list is bounded in length and entries expire
//! after a retention period.

mod model;
mod store;

pub use model::CardMixingSession;
pub use store::SessionHistoryStore;
