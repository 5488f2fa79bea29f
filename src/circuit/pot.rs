//! Pot growth, bad beats, banking, and circuit progression.
//!
//! These helpers work on the scratch copy a transition is building; they
//! are only called for High Roller boards. In High Roller the displayed
//! `score` is always `banked_score + current_pot`.

use tracing::{debug, info};

use super::stage::CircuitStage;
use crate::core::{build_initial_state, EngineError, EngineResult, GameMode, MemoryGameState};

/// What a pot update did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PotOutcome {
    /// Match points went into the pot.
    Grew { added: i64 },
    /// The streak reached The Nuts and the pot was banked.
    TheNuts { banked: i64 },
    /// A miss cost part of the pot.
    Shaved { lost: i64 },
    /// Pot and bank are both empty.
    Busted,
}

fn stage_of(state: &MemoryGameState) -> CircuitStage {
    state.circuit_stage.unwrap_or_default()
}

fn sync_score(state: &mut MemoryGameState) {
    state.score = state.banked_score + state.current_pot;
    state.score_breakdown.total_score = state.score;
}

/// Move the whole pot into the bank. Returns the amount moved.
pub fn bank_pot(state: &mut MemoryGameState) -> i64 {
    let amount = state.current_pot;
    state.banked_score += amount;
    state.current_pot = 0;
    sync_score(state);
    amount
}

/// Add a match's points to the pot, scaled by the stage.
///
/// Expects `combo_multiplier` to already include this match; at or above
/// `the_nuts_threshold` the pot is banked immediately.
pub fn grow_pot(state: &mut MemoryGameState, match_points: i64) -> PotOutcome {
    let added = match_points * stage_of(state).pot_growth_multiplier();
    state.current_pot += added;
    sync_score(state);
    debug!(added, pot = state.current_pot, "pot grew");

    if state.combo_multiplier >= state.config.the_nuts_threshold {
        let banked = bank_pot(state);
        info!(banked, bank = state.banked_score, "the nuts");
        PotOutcome::TheNuts { banked }
    } else {
        PotOutcome::Grew { added }
    }
}

/// Apply the stage's bad-beat penalty: `pot = floor(pot * (1 - penalty))`.
///
/// Busts the player when both pot and bank end up empty.
pub fn bad_beat(state: &mut MemoryGameState) -> PotOutcome {
    let keep_percent = 100 - stage_of(state).bust_penalty_percent();
    let before = state.current_pot;
    state.current_pot = before * keep_percent / 100;
    sync_score(state);

    if state.current_pot == 0 && state.banked_score == 0 {
        state.is_busted = true;
        state.is_game_over = true;
        info!(moves = state.moves, "busted");
        return PotOutcome::Busted;
    }

    let lost = before - state.current_pot;
    debug!(lost, pot = state.current_pot, "bad beat");
    PotOutcome::Shaved { lost }
}

/// Deal the next circuit stage after a won High Roller board.
///
/// The banked winnings become the next stage's starting pot.
pub fn advance_circuit(
    state: &MemoryGameState,
    seed: Option<u64>,
) -> EngineResult<MemoryGameState> {
    if state.mode != GameMode::HighRoller {
        return Err(EngineError::Circuit("not a High Roller game".to_string()));
    }
    if !state.is_game_won {
        return Err(EngineError::Circuit("stage not cleared".to_string()));
    }
    let current = stage_of(state);
    let next = current
        .next()
        .ok_or_else(|| EngineError::Circuit(format!("{current:?} is the final stage")))?;

    let mut fresh = build_initial_state(
        next.pair_count(),
        state.config.clone(),
        GameMode::HighRoller,
        state.difficulty,
        seed,
    )?;
    fresh.circuit_stage = Some(next);
    fresh.current_pot = state.banked_score;
    sync_score(&mut fresh);

    info!(stage = ?next, stake = fresh.current_pot, "circuit advanced");
    Ok(fresh)
}
