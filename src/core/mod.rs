//! Core engine types: configuration, errors, RNG, and the game state.
//!
//! Mode-specific rules (High Roller pot, Daily Challenge mutators) build on
//! these types rather than modifying them.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{
    DifficultyType, GameMode, ScoringConfig, SessionConfig, MAX_DOUBLE_DOWN_STAKE, MAX_POINT_VALUE,
};
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
pub use state::{build_initial_state, MemoryGameState};
