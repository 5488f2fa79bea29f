//! Domain events emitted by transitions.
//!
//! A transition that changes nothing returns no event at all, so callers
//! can treat `None` as "input ignored".

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Why a game ended without being won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Missed while a Double Down was riding.
    DoubleDownBust,
    /// High Roller pot and bank both ran dry.
    Busted,
    /// Time Attack countdown ran out.
    TimeExpired,
}

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// First card of a turn turned over.
    CardFlipped { card: CardId },
    /// Two cards matched.
    MatchSuccess { first: CardId, second: CardId, points: i64 },
    /// Two cards did not match; they stay visible until reset.
    MatchFailure { first: CardId, second: CardId },
    /// Last pair matched.
    GameWon { score: i64 },
    /// The game ended without a win.
    GameOver { reason: GameOverReason },
    /// High Roller streak banked the pot.
    TheNutsAchieved { banked: i64 },
}

impl GameEvent {
    /// The event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameWon { .. } | GameEvent::GameOver { .. })
    }
}
