//! High Roller mode: the circuit stages and the pot/bank rules.
//!
//! Matches grow an at-risk pot; misses shave it by the stage's bust penalty.
//! Reaching The Nuts (or clearing the board) banks the pot. Losing both pot
//! and bank ends the run as Busted.

pub mod pot;
pub mod stage;

pub use pot::{advance_circuit, bank_pot, bad_beat, grow_pot, PotOutcome};
pub use stage::CircuitStage;
