//! Engine errors.
//!
//! Only construction and decoding can fail. Misuse during play (unknown card,
//! double clicks, flipping after the game ended) is a no-op, not an error.

/// Errors raised when the engine refuses to produce a state.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A board needs at least one pair.
    #[error("pair count must be positive, got {0}")]
    InvalidPairCount(u32),

    /// More pairs requested than distinct cards exist.
    #[error("cannot deal {requested} pairs from a 52-card universe (max 26)")]
    TooManyPairs { requested: u32 },

    /// A scoring tunable is out of range.
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),

    /// A state broke one of the board invariants.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The circuit cannot advance from this state.
    #[error("circuit error: {0}")]
    Circuit(String),

    /// JSON snapshot could not be encoded or decoded.
    #[error("snapshot json: {0}")]
    SnapshotJson(#[from] serde_json::Error),

    /// Binary snapshot could not be encoded or decoded.
    #[error("snapshot binary: {0}")]
    SnapshotBinary(#[from] bincode::Error),
}

/// Shorthand result type for engine construction paths.
pub type EngineResult<T> = Result<T, EngineError>;
