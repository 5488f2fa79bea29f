//! The game state aggregate.
//!
//! ## MemoryGameState
//!
//! Everything a board needs to continue: the cards, counters, mode-specific
//! pot and mutator data, the scoring tunables, and the generator position
//! for later reshuffles.
//!
//! States are values. The rules functions take `&MemoryGameState` and return
//! a replacement; nothing is mutated in place. Cards and mutators live in
//! `im` persistent collections so each replacement clones in O(1).

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::config::{DifficultyType, GameMode, ScoringConfig};
use super::error::{EngineError, EngineResult};
use super::rng::{GameRng, GameRngState};
use crate::cards::{build_deck, check_pairs, CardId, CardState, MAX_PAIRS};
use crate::circuit::CircuitStage;
use crate::daily::Mutator;
use crate::scoring::ScoreBreakdown;

/// Complete state of one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryGameState {
    /// Cards in board order; `cards[i].id == CardId(i)`.
    pub cards: Vector<CardState>,
    pub pair_count: u32,
    pub mode: GameMode,
    pub difficulty: DifficultyType,

    /// Resolved flip pairs, matched or not.
    pub moves: u32,
    /// Moves since the last successful match (drives Mirage).
    #[serde(default)]
    pub moves_since_last_match: u32,
    pub score: i64,
    /// Consecutive-match streak.
    pub combo_multiplier: u32,

    pub is_double_down_active: bool,
    pub is_busted: bool,
    pub is_game_won: bool,
    pub is_game_over: bool,

    // === High Roller ===
    /// At-risk winnings.
    #[serde(default)]
    pub current_pot: i64,
    /// Winnings moved out of the pot, safe from busting.
    #[serde(default)]
    pub banked_score: i64,
    /// Present only in High Roller mode.
    #[serde(default)]
    pub circuit_stage: Option<CircuitStage>,

    // === Daily Challenge ===
    /// Non-empty only in Daily Challenge mode.
    #[serde(default)]
    pub active_mutators: OrdSet<Mutator>,

    pub seed: u64,
    /// Generator position after the deal and any reshuffles.
    pub rng: GameRngState,
    pub config: ScoringConfig,
    #[serde(default)]
    pub score_breakdown: ScoreBreakdown,
    /// Ids of the most recently matched pair.
    #[serde(default)]
    pub last_matched_ids: SmallVec<[CardId; 2]>,
}

/// Deal a fresh board.
///
/// With `seed == None` a seed is drawn and recorded, so the board can still
/// be replayed or shared. High Roller boards start in the Qualifier with its
/// buy-in as the pot.
pub fn build_initial_state(
    pair_count: u32,
    config: ScoringConfig,
    mode: GameMode,
    difficulty: DifficultyType,
    seed: Option<u64>,
) -> EngineResult<MemoryGameState> {
    config.validate()?;

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = GameRng::new(seed);
    let cards = build_deck(pair_count, &mut rng)?;

    let (circuit_stage, current_pot) = match mode {
        GameMode::HighRoller => {
            let stage = CircuitStage::default();
            (Some(stage), stage.buy_in())
        }
        _ => (None, 0),
    };

    debug!(pair_count, ?mode, ?difficulty, seed, "dealt new board");

    let state = MemoryGameState {
        cards,
        pair_count,
        mode,
        difficulty,
        moves: 0,
        moves_since_last_match: 0,
        score: current_pot,
        combo_multiplier: 0,
        is_double_down_active: false,
        is_busted: false,
        is_game_won: false,
        is_game_over: false,
        current_pot,
        banked_score: 0,
        circuit_stage,
        active_mutators: OrdSet::new(),
        seed,
        rng: rng.state(),
        config,
        score_breakdown: ScoreBreakdown {
            total_score: current_pot,
            ..ScoreBreakdown::default()
        },
        last_matched_ids: SmallVec::new(),
    };
    Ok(state)
}

impl MemoryGameState {
    /// Attach Daily Challenge mutators. Ignored in other modes.
    #[must_use]
    pub fn with_mutators(mut self, mutators: impl IntoIterator<Item = Mutator>) -> Self {
        if self.mode == GameMode::DailyChallenge {
            self.active_mutators = mutators.into_iter().collect();
        }
        self
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardState> {
        self.cards.get(id.index()).filter(|card| card.id == id)
    }

    /// Cards face up and awaiting resolution.
    pub fn pending_cards(&self) -> impl Iterator<Item = &CardState> {
        self.cards.iter().filter(|card| card.is_pending())
    }

    /// Pairs still on the board.
    #[must_use]
    pub fn unmatched_pair_count(&self) -> u32 {
        let unmatched = self.cards.iter().filter(|card| !card.is_matched).count();
        (unmatched / 2) as u32
    }

    /// Every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    /// Streak is hot enough to unlock Double Down.
    #[must_use]
    pub fn is_heat_mode(&self) -> bool {
        self.combo_multiplier >= self.config.heat_mode_threshold
    }

    /// Streak has reached the High Roller threshold.
    #[must_use]
    pub fn is_high_roller_streak(&self) -> bool {
        self.combo_multiplier >= self.config.high_roller_threshold
    }

    /// Check every board invariant.
    ///
    /// Decoded snapshots go through this before they are handed out.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pair_count == 0 {
            return Err(EngineError::InvalidPairCount(0));
        }
        if self.pair_count > MAX_PAIRS {
            return Err(EngineError::TooManyPairs {
                requested: self.pair_count,
            });
        }
        self.config.validate()?;
        check_pairs(&self.cards, self.pair_count)?;

        let violation = |msg: &str| Err(EngineError::InvariantViolation(msg.to_string()));

        if self.pending_cards().count() > 2 {
            return violation("more than two unmatched cards face up");
        }
        if self.cards.iter().any(|c| c.is_matched && !c.is_face_up) {
            return violation("matched card is face down");
        }
        if self.cards.iter().any(|c| c.is_error && !c.is_pending()) {
            return violation("error flag on a card that is not pending");
        }
        if self.is_game_won && !(self.all_matched() && self.is_game_over) {
            return violation("won game with cards left or still running");
        }
        if self.is_busted && !self.is_game_over {
            return violation("busted game still running");
        }
        if self.score_breakdown.total_score != self.score {
            return violation("score breakdown total out of step with score");
        }
        if self.current_pot < 0 || self.banked_score < 0 {
            return violation("negative pot or bank");
        }
        if (self.mode == GameMode::HighRoller) != self.circuit_stage.is_some() {
            return violation("circuit stage present outside High Roller");
        }
        if self.mode != GameMode::DailyChallenge && !self.active_mutators.is_empty() {
            return violation("mutators active outside Daily Challenge");
        }
        Ok(())
    }
}
