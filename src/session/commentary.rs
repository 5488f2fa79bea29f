//! Dealer commentary: flavor text for domain events.
//!
//! Lines come from a seeded stream separate from the deal, so replays show
//! the same banter without disturbing card order.

use crate::core::{GameRng, GameRngState};
use crate::rules::{GameEvent, GameOverReason};

const MATCH_LINES: &[&str] = &["Nice pull.", "Read 'em and reap.", "The table likes you."];
const MISS_LINES: &[&str] = &["Not this time.", "The deck remembers.", "Shake it off."];
const NUTS_LINES: &[&str] = &["The nuts! Pot's in the bank.", "Locked up tight."];
const WIN_LINES: &[&str] = &["Board cleared.", "That's the game."];
const BUST_LINES: &[&str] = &["Busted.", "The house always collects."];
const TIME_LINES: &[&str] = &["Time's up."];

/// Seeded source of dealer lines.
#[derive(Clone, Debug)]
pub struct Commentator {
    rng: GameRng,
}

impl Commentator {
    /// Commentary stream for a board seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("commentary"),
        }
    }

    /// Resume a stream saved with [`Commentator::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Current stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// A line for `event`, or `None` for events the dealer lets pass.
    pub fn line_for(&mut self, event: &GameEvent) -> Option<&'static str> {
        let lines = match event {
            GameEvent::CardFlipped { .. } => return None,
            GameEvent::MatchSuccess { .. } => MATCH_LINES,
            GameEvent::MatchFailure { .. } => MISS_LINES,
            GameEvent::TheNutsAchieved { .. } => NUTS_LINES,
            GameEvent::GameWon { .. } => WIN_LINES,
            GameEvent::GameOver {
                reason: GameOverReason::TimeExpired,
            } => TIME_LINES,
            GameEvent::GameOver { .. } => BUST_LINES,
        };
        self.rng.choose(lines).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_same_seed_same_lines() {
        let miss = GameEvent::MatchFailure {
            first: CardId::new(0),
            second: CardId::new(1),
        };
        let mut a = Commentator::new(4);
        let mut b = Commentator::new(4);

        for _ in 0..5 {
            assert_eq!(a.line_for(&miss), b.line_for(&miss));
        }
    }

    #[test]
    fn test_restored_stream_continues() {
        let miss = GameEvent::MatchFailure {
            first: CardId::new(0),
            second: CardId::new(1),
        };
        let mut dealer = Commentator::new(8);
        dealer.line_for(&miss);
        let mut restored = Commentator::from_state(&dealer.state());

        for _ in 0..5 {
            assert_eq!(dealer.line_for(&miss), restored.line_for(&miss));
        }
    }

    #[test]
    fn test_flips_are_quiet() {
        let mut dealer = Commentator::new(1);
        assert!(dealer
            .line_for(&GameEvent::CardFlipped { card: CardId::new(2) })
            .is_none());
        assert!(dealer.line_for(&GameEvent::GameWon { score: 1 }).is_some());
    }
}
