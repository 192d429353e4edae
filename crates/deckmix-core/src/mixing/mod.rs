//! Card mixing across decks.
//!
//! A mix validates the request, flattens the selected decks into one pool,
//! draws a random subset from it and decorates each drawn card with its
//! deck's display attributes and its position in the result.
//!
//! ```
//! use deckmix_core::deck::{AllCards, AllDecks, Card, Deck};
//! use deckmix_core::mixing::{calculate_grid_layout, mix_cards};
//!
//! let deck = Deck::with_id("d1", "Spanish", "#ef4444");
//! let mut cards = AllCards::new();
//! cards.insert("d1".to_string(), vec![Card::new("d1", "hola", "hello")]);
//! let mut decks = AllDecks::new();
//! decks.insert("d1".to_string(), deck);
//!
//! let mixed = mix_cards(&["d1".to_string()], 1, &cards, &decks).unwrap();
//! assert_eq!(mixed[0].deck_name, "Spanish");
//! assert_eq!(calculate_grid_layout(mixed.len()).cols, 1);
//! ```

mod layout;
mod model;
mod orchestrator;
mod pool;
mod sampler;
mod validator;

pub use layout::calculate_grid_layout;
pub use model::{GridLayout, MixedCard};
pub use orchestrator::{mix_cards, mix_cards_with};
pub use pool::{available_count, combine_cards};
pub use sampler::{select_random, select_random_with, shuffle, shuffle_with};
pub use validator::validate_mix_request;
