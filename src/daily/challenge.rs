//! The board of the day.
//!
//! Every player gets the same board and mutators for a given calendar date,
//! so results can be compared and shared.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::mutator::Mutator;
use crate::core::rng::mix;
use crate::core::{
    build_initial_state, DifficultyType, EngineError, EngineResult, GameMode, GameRng,
    MemoryGameState, ScoringConfig,
};

const MUTATOR_ROTATION: [&[Mutator]; 3] = [
    &[Mutator::Blackout],
    &[Mutator::Mirage],
    &[Mutator::Blackout, Mutator::Mirage],
];

/// A dated challenge: seed plus the day's mutators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub seed: u64,
    pub mutators: OrdSet<Mutator>,
}

impl DailyChallenge {
    /// The challenge for a calendar date.
    pub fn for_date(year: i32, month: u32, day: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EngineError::InvalidConfig(format!(
                "no such date {year:04}-{month:02}-{day:02}"
            )));
        }

        let ordinal = i64::from(year) * 10_000 + i64::from(month) * 100 + i64::from(day);
        let seed = mix(ordinal as u64);

        let mut rng = GameRng::new(seed).for_context("daily-mutators");
        let mutators = rng
            .choose(&MUTATOR_ROTATION)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();

        Ok(Self {
            year,
            month,
            day,
            seed,
            mutators,
        })
    }

    /// Deal the day's board.
    pub fn build_state(
        &self,
        config: ScoringConfig,
        difficulty: DifficultyType,
    ) -> EngineResult<MemoryGameState> {
        let state = build_initial_state(
            difficulty.default_pair_count(),
            config,
            GameMode::DailyChallenge,
            difficulty,
            Some(self.seed),
        )?;
        Ok(state.with_mutators(self.mutators.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_same_board() {
        let a = DailyChallenge::for_date(2026, 10, 16).unwrap();
        let b = DailyChallenge::for_date(2026, 10, 16).unwrap();
        assert_eq!(a, b);

        let board_a = a.build_state(ScoringConfig::default(), DifficultyType::Master).unwrap();
        let board_b = b.build_state(ScoringConfig::default(), DifficultyType::Master).unwrap();
        assert_eq!(board_a.cards, board_b.cards);
        assert_eq!(board_a.active_mutators, a.mutators);
    }

    #[test]
    fn test_days_differ() {
        let a = DailyChallenge::for_date(2026, 10, 16).unwrap();
        let b = DailyChallenge::for_date(2026, 10, 17).unwrap();
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn test_always_has_a_mutator() {
        for day in 1..=28 {
            let challenge = DailyChallenge::for_date(2026, 2, day).unwrap();
            assert!(!challenge.mutators.is_empty());
        }
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(DailyChallenge::for_date(2026, 13, 1).is_err());
        assert!(DailyChallenge::for_date(2026, 1, 0).is_err());
    }
}
