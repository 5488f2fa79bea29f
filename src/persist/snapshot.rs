//! Save-game codec.
//!
//! A snapshot is the full board plus elapsed play time and, when a session
//! wrote it, the dealer commentary position. JSON is the
//! self-describing form (enums by name); bincode is the compact form.
//! Decoding re-checks every board invariant, so a tampered or corrupt save
//! is rejected instead of producing an invalid state.

use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, GameRngState, MemoryGameState};

/// Current snapshot layout.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A persisted game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub state: MemoryGameState,
    #[serde(default)]
    pub elapsed_seconds: u64,
    /// Commentary stream position; absent in saves made outside a session.
    #[serde(default)]
    pub commentary: Option<GameRngState>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl GameSnapshot {
    #[must_use]
    pub fn new(state: MemoryGameState, elapsed_seconds: u64) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state,
            elapsed_seconds,
            commentary: None,
        }
    }

    #[must_use]
    pub fn with_commentary(mut self, commentary: GameRngState) -> Self {
        self.commentary = Some(commentary);
        self
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.state.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.state.validate()?;
        Ok(snapshot)
    }
}
