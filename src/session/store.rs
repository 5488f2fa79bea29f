//! Storage collaborator.
//!
//! The engine never does I/O. A `GameStore` is handed to the session, which
//! treats every failure as non-fatal: a failed load starts a fresh game, a
//! failed save is retried on the next write.

use crate::core::EngineError;
use crate::persist::GameSnapshot;

/// Storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Stored data could not be encoded or decoded.
    #[error("store codec: {0}")]
    Codec(#[from] EngineError),
}

/// Where a session keeps its single in-progress game.
pub trait GameStore {
    /// Persist the current game, replacing any previous one.
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// Load the in-progress game, if any.
    fn load(&mut self) -> Result<Option<GameSnapshot>, StoreError>;

    /// Forget the in-progress game.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory store holding the JSON form of the snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored JSON, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.json.as_deref()
    }

    /// Replace the stored JSON verbatim.
    pub fn set_raw(&mut self, json: impl Into<String>) {
        self.json = Some(json.into());
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        self.json = Some(snapshot.to_json()?);
        Ok(())
    }

    fn load(&mut self) -> Result<Option<GameSnapshot>, StoreError> {
        self.json
            .as_deref()
            .map(GameSnapshot::from_json)
            .transpose()
            .map_err(StoreError::from)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.json = None;
        Ok(())
    }
}
