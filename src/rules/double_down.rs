//! Double Down: bet the whole score on the next pair.
//!
//! Available in Heat Mode with at least three pairs left. A hit multiplies
//! that match's points by the stake factor; a miss zeroes the score and ends
//! the game.

use tracing::{debug, info};

use super::event::{GameEvent, GameOverReason};
use crate::core::MemoryGameState;

/// Pairs that must remain for a Double Down to be offered.
pub const MIN_PAIRS_FOR_DOUBLE_DOWN: u32 = 3;

/// Whether `activate_double_down` would succeed.
#[must_use]
pub fn can_double_down(state: &MemoryGameState) -> bool {
    !state.is_game_over
        && !state.is_double_down_active
        && state.is_heat_mode()
        && state.unmatched_pair_count() >= MIN_PAIRS_FOR_DOUBLE_DOWN
}

/// Arm a Double Down. Returns the state unchanged if not allowed.
#[must_use]
pub fn activate_double_down(state: &MemoryGameState) -> MemoryGameState {
    if !can_double_down(state) {
        return state.clone();
    }
    debug!(combo = state.combo_multiplier, score = state.score, "double down armed");
    MemoryGameState {
        is_double_down_active: true,
        ..state.clone()
    }
}

/// Settle a miss while a Double Down is riding. Overrides every other
/// mismatch rule, High Roller bad beats included.
pub(crate) fn fail_double_down(state: &mut MemoryGameState) -> GameEvent {
    info!(lost = state.score, moves = state.moves, "double down bust");
    state.score = 0;
    state.score_breakdown.total_score = 0;
    state.is_busted = true;
    state.is_game_over = true;
    state.is_double_down_active = false;
    state.combo_multiplier = 0;
    GameEvent::GameOver {
        reason: GameOverReason::DoubleDownBust,
    }
}
