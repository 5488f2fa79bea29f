//! Daily Challenge mode: dated boards and rule mutators.

pub mod challenge;
pub mod mutator;

pub use challenge::DailyChallenge;
pub use mutator::{peek_duration, should_shuffle, shuffle_remaining_cards, Mutator, MIRAGE_INTERVAL};
