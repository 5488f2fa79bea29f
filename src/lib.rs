//! # memory-engine
//!
//! Deterministic rules engine for a card-matching memory game.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every rule is a function from `(state, input)`
//!    to `(state, event)`. No I/O, no clocks, no shared state.
//!
//! 2. **Reproducible**: boards are dealt from a seed, and the generator
//!    position travels inside the state so later reshuffles replay too.
//!
//! 3. **Misuse is harmless**: stray input during play is a no-op; only
//!    construction and decoding can fail.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: cards live in an `im::Vector`, so each
//!   replacement state shares structure with the previous one.
//!
//! - **Layered modes**: High Roller pot rules and Daily Challenge mutators
//!   plug into the flip/match engine rather than forking it.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG, and the state aggregate
//! - `cards`: suits, ranks, card state, dealing
//! - `rules`: flip/match transitions, Double Down, domain events
//! - `scoring`: match points and end-of-board bonuses
//! - `circuit`: High Roller stages, pot, banking, busting
//! - `daily`: dated challenges and mutators
//! - `persist`: snapshot codec
//! - `session`: clock-driven orchestrator and storage seam

pub mod cards;
pub mod circuit;
pub mod core;
pub mod daily;
pub mod persist;
pub mod rules;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    build_initial_state, DifficultyType, EngineError, EngineResult, GameMode, GameRng,
    GameRngState, MemoryGameState, ScoringConfig, SessionConfig,
};

pub use crate::cards::{CardId, CardState, Rank, Suit, MAX_PAIRS};

pub use crate::rules::{
    activate_double_down, can_double_down, flip_card, reset_error_cards, time_expired, GameEvent,
    GameOverReason,
};

pub use crate::scoring::{apply_final_bonuses, calculate_match_score, MatchScore, ScoreBreakdown};

pub use crate::circuit::{advance_circuit, CircuitStage};

pub use crate::daily::{shuffle_remaining_cards, DailyChallenge, Mutator};

pub use crate::persist::GameSnapshot;

pub use crate::session::{GameSession, GameStore, MemoryStore, NewGame, StoreError};
