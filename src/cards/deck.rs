//! Dealing a board.
//!
//! A board of `n` pairs draws `n` distinct faces from the 52-card universe,
//! lays each face down twice, shuffles, and numbers positions `0..2n`.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::{CardId, CardState, Rank, Suit};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::GameRng;

/// Distinct faces available: 4 suits x 13 ranks, two slots per pair.
pub const MAX_PAIRS: u32 = 26;

/// Deal a shuffled board of `pair_count` pairs.
///
/// Identical `(pair_count, rng seed)` always yields an identical sequence.
pub fn build_deck(pair_count: u32, rng: &mut GameRng) -> EngineResult<Vector<CardState>> {
    if pair_count == 0 {
        return Err(EngineError::InvalidPairCount(pair_count));
    }
    if pair_count > MAX_PAIRS {
        return Err(EngineError::TooManyPairs {
            requested: pair_count,
        });
    }

    let mut universe: Vec<(Suit, Rank)> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (suit, rank)))
        .collect();
    rng.shuffle(&mut universe);

    let mut cards: Vec<CardState> = universe
        .into_iter()
        .take(pair_count as usize)
        .flat_map(|(suit, rank)| {
            [
                CardState::new(CardId::new(0), suit, rank),
                CardState::new(CardId::new(0), suit, rank),
            ]
        })
        .collect();
    rng.shuffle(&mut cards);

    Ok(reindex(cards))
}

/// Renumber ids to match positions.
pub fn reindex(cards: impl IntoIterator<Item = CardState>) -> Vector<CardState> {
    cards
        .into_iter()
        .enumerate()
        .map(|(position, card)| CardState {
            id: CardId::new(position as u32),
            ..card
        })
        .collect()
}

/// Check that `cards` holds exactly `pair_count` faces, each twice, with ids
/// matching positions.
pub fn check_pairs(cards: &Vector<CardState>, pair_count: u32) -> EngineResult<()> {
    if cards.len() != 2 * pair_count as usize {
        return Err(EngineError::InvariantViolation(format!(
            "expected {} cards for {pair_count} pairs, found {}",
            2 * pair_count,
            cards.len()
        )));
    }

    if let Some((position, card)) = cards
        .iter()
        .enumerate()
        .find(|(position, card)| card.id.index() != *position)
    {
        return Err(EngineError::InvariantViolation(format!(
            "{} sits at position {position}",
            card.id
        )));
    }

    let mut faces: FxHashMap<(Suit, Rank), u32> = FxHashMap::default();
    for card in cards {
        *faces.entry((card.suit, card.rank)).or_insert(0) += 1;
    }
    if faces.len() != pair_count as usize || faces.values().any(|&count| count != 2) {
        return Err(EngineError::InvariantViolation(
            "every face must appear exactly twice".to_string(),
        ));
    }

    Ok(())
}
