//! Cards and boards.
//!
//! - `card`: suits, ranks, and the per-card `CardState`
//! - `deck`: dealing a seeded board and checking its pair structure

pub mod card;
pub mod deck;

pub use card::{CardId, CardState, Rank, Suit};
pub use deck::{build_deck, check_pairs, reindex, MAX_PAIRS};
