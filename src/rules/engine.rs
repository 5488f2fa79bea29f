//! Flip/match transitions.
//!
//! Board phases are implicit in the cards: no pending card, one pending
//! card, or two (resolved on the spot). Once `is_game_over` is set every
//! transition is a no-op.
//!
//! ## Misuse is a no-op
//!
//! Unknown ids, flips on face-up or matched cards, a third flip while a
//! mismatch is still showing, and flips after the game ended all return the
//! state unchanged and no event, so UI races can never corrupt a board.

use smallvec::smallvec;
use tracing::{debug, info};

use super::double_down::fail_double_down;
use super::event::{GameEvent, GameOverReason};
use crate::cards::{CardId, CardState};
use crate::circuit::{bad_beat, bank_pot, grow_pot, PotOutcome};
use crate::core::{GameMode, MemoryGameState};
use crate::scoring::{calculate_match_score, combo_bonus};

/// Turn a card over and resolve the pair if it is the second of the turn.
#[must_use]
pub fn flip_card(state: &MemoryGameState, card_id: CardId) -> (MemoryGameState, Option<GameEvent>) {
    if state.is_game_over {
        return (state.clone(), None);
    }
    let Some(card) = state.card(card_id) else {
        return (state.clone(), None);
    };
    if card.is_face_up || card.is_matched || state.pending_cards().count() >= 2 {
        return (state.clone(), None);
    }

    let mut next = state.clone();
    next.cards[card_id.index()].is_face_up = true;

    let pending: Vec<CardState> = next.pending_cards().cloned().collect();
    match pending.as_slice() {
        [_] => {
            debug!(%card_id, "card flipped");
            (next, Some(GameEvent::CardFlipped { card: card_id }))
        }
        [first, second] if first.pairs_with(second) => {
            let event = resolve_match(&mut next, first.id, second.id);
            (next, Some(event))
        }
        [first, second] => {
            let event = resolve_mismatch(&mut next, first.id, second.id);
            (next, Some(event))
        }
        _ => (state.clone(), None),
    }
}

fn resolve_match(state: &mut MemoryGameState, first: CardId, second: CardId) -> GameEvent {
    for id in [first, second] {
        state.cards[id.index()].is_matched = true;
    }
    state.moves += 1;

    let base = state.config.base_match_points;
    let bonus = combo_bonus(&state.config, state.combo_multiplier);
    let high_roller = state.mode == GameMode::HighRoller;

    let scored_from = if high_roller { 0 } else { state.score };
    let result = calculate_match_score(
        &state.config,
        scored_from,
        state.is_double_down_active,
        base,
        bonus,
    );
    let points = result.increment(scored_from);

    state.combo_multiplier += 1;
    state.moves_since_last_match = 0;
    state.is_double_down_active = false;
    state.last_matched_ids = smallvec![first, second];

    debug!(%first, %second, points, combo = state.combo_multiplier, "match");

    let pot_outcome = if high_roller {
        Some(grow_pot(state, points))
    } else {
        state.score = result.final_score;
        state.score_breakdown.match_points += base;
        state.score_breakdown.combo_bonus += bonus;
        state.score_breakdown.double_down_bonus += result.double_down_bonus;
        state.score_breakdown.total_score = state.score;
        None
    };

    if state.all_matched() {
        if high_roller && state.current_pot > 0 {
            bank_pot(state);
        }
        state.is_game_won = true;
        state.is_game_over = true;
        info!(score = state.score, moves = state.moves, "board cleared");
        return GameEvent::GameWon { score: state.score };
    }

    match pot_outcome {
        Some(PotOutcome::TheNuts { banked }) => GameEvent::TheNutsAchieved { banked },
        _ => GameEvent::MatchSuccess { first, second, points },
    }
}

fn resolve_mismatch(state: &mut MemoryGameState, first: CardId, second: CardId) -> GameEvent {
    for id in [first, second] {
        state.cards[id.index()].is_error = true;
    }
    state.moves += 1;
    state.combo_multiplier = 0;
    state.moves_since_last_match += 1;
    state.last_matched_ids.clear();

    debug!(%first, %second, moves = state.moves, "mismatch");

    if state.is_double_down_active {
        return fail_double_down(state);
    }

    if state.mode == GameMode::HighRoller && bad_beat(state) == PotOutcome::Busted {
        return GameEvent::GameOver {
            reason: GameOverReason::Busted,
        };
    }

    GameEvent::MatchFailure { first, second }
}

/// Turn mismatched cards back face down. Idempotent.
#[must_use]
pub fn reset_error_cards(state: &MemoryGameState) -> MemoryGameState {
    if !state.cards.iter().any(|card| card.is_error) {
        return state.clone();
    }
    let cards = state
        .cards
        .iter()
        .map(|card| {
            if card.is_error {
                CardState {
                    is_face_up: false,
                    is_error: false,
                    ..card.clone()
                }
            } else {
                card.clone()
            }
        })
        .collect();

    MemoryGameState {
        cards,
        ..state.clone()
    }
}

/// End a game whose countdown ran out. No-op on finished games.
#[must_use]
pub fn time_expired(state: &MemoryGameState) -> (MemoryGameState, Option<GameEvent>) {
    if state.is_game_over {
        return (state.clone(), None);
    }
    info!(moves = state.moves, score = state.score, "time expired");
    let next = MemoryGameState {
        is_game_over: true,
        is_double_down_active: false,
        ..state.clone()
    };
    (
        next,
        Some(GameEvent::GameOver {
            reason: GameOverReason::TimeExpired,
        }),
    )
}
