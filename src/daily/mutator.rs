//! Daily Challenge rule mutators.
//!
//! Blackout never touches engine transitions; the orchestrator reads it to
//! shorten the opening peek. Mirage reshuffles the unmatched cards after a
//! run of misses.

use std::time::Duration;

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{reindex, CardId, CardState};
use crate::core::rng::GameRng;
use crate::core::{GameMode, MemoryGameState};

/// Misses in a row that make the board shift under Mirage.
pub const MIRAGE_INTERVAL: u32 = 5;

/// A rule modifier active for a Daily Challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mutator {
    /// Opening peek lasts half as long.
    Blackout,
    /// Unmatched cards reshuffle every `MIRAGE_INTERVAL` moves without a match.
    Mirage,
}

/// Opening peek granted under `mutators`.
#[must_use]
pub fn peek_duration(base: Duration, mutators: &OrdSet<Mutator>) -> Duration {
    if mutators.contains(&Mutator::Blackout) {
        base / 2
    } else {
        base
    }
}

/// Whether the orchestrator should call `shuffle_remaining_cards` now.
#[must_use]
pub fn should_shuffle(state: &MemoryGameState, interval: u32) -> bool {
    state.mode == GameMode::DailyChallenge
        && state.active_mutators.contains(&Mutator::Mirage)
        && !state.is_game_over
        && interval > 0
        && state.moves_since_last_match >= interval
}

/// Shuffle the positions of every unmatched card.
///
/// Unmatched cards go back face down with their error flags cleared, matched
/// cards keep their relative order at the front, and ids are renumbered over
/// the new layout. Draws from the generator stored in the state, so the
/// result is reproducible.
#[must_use]
pub fn shuffle_remaining_cards(state: &MemoryGameState) -> MemoryGameState {
    let (matched, mut unmatched): (Vec<CardState>, Vec<CardState>) =
        state.cards.iter().cloned().partition(|card| card.is_matched);

    let mut rng = GameRng::from_state(&state.rng);
    rng.shuffle(&mut unmatched);

    let hidden = unmatched.into_iter().map(|card| CardState {
        is_face_up: false,
        is_error: false,
        ..card
    });
    let old_ids: Vector<CardId> = matched.iter().map(|card| card.id).collect();
    let cards = reindex(matched.into_iter().chain(hidden));

    let last_matched_ids = state
        .last_matched_ids
        .iter()
        .filter_map(|old| old_ids.index_of(old).map(|position| CardId::new(position as u32)))
        .collect();

    debug!(
        unmatched = cards.iter().filter(|c| !c.is_matched).count(),
        "mirage reshuffle"
    );

    MemoryGameState {
        cards,
        last_matched_ids,
        moves_since_last_match: 0,
        rng: rng.state(),
        ..state.clone()
    }
}
