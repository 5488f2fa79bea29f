//! Score arithmetic.
//!
//! Match points are `base_match_points + combo_bonus_points * combo²`, where
//! `combo` is the streak *before* the match being scored. Every mode uses
//! the same rule; High Roller then scales the result into the pot.

use tracing::info;

use super::breakdown::ScoreBreakdown;
use crate::core::{DifficultyType, GameMode, MemoryGameState, ScoringConfig};

/// Result of scoring one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchScore {
    /// Score after the match.
    pub final_score: i64,
    /// Extra points won by an active Double Down (0 otherwise).
    pub double_down_bonus: i64,
}

impl MatchScore {
    /// Points this match added.
    #[must_use]
    pub fn increment(&self, previous_score: i64) -> i64 {
        self.final_score - previous_score
    }
}

/// Streak bonus for a match made at combo level `combo`.
#[must_use]
pub fn combo_bonus(config: &ScoringConfig, combo: u32) -> i64 {
    let combo = i64::from(combo);
    config.combo_bonus_points.saturating_mul(combo * combo)
}

/// Add one match to `current_score`.
///
/// The increment is `match_base_points + match_combo_bonus`. Under Double
/// Down it is multiplied by the stake factor and the extra part is reported
/// as `double_down_bonus`.
#[must_use]
pub fn calculate_match_score(
    config: &ScoringConfig,
    current_score: i64,
    is_double_down_active: bool,
    match_base_points: i64,
    match_combo_bonus: i64,
) -> MatchScore {
    let increment = match_base_points.saturating_add(match_combo_bonus);
    let double_down_bonus = if is_double_down_active {
        increment.saturating_mul(config.double_down_penalty - 1)
    } else {
        0
    };

    MatchScore {
        final_score: current_score
            .saturating_add(increment)
            .saturating_add(double_down_bonus),
        double_down_bonus,
    }
}

/// Bonus for time. In Time Attack `elapsed_seconds` is the time *left* on
/// the countdown; elsewhere it is time spent.
#[must_use]
pub fn time_bonus(
    config: &ScoringConfig,
    mode: GameMode,
    pair_count: u32,
    elapsed_seconds: u64,
) -> i64 {
    let seconds = i64::try_from(elapsed_seconds).unwrap_or(i64::MAX);
    match mode {
        GameMode::TimeAttack => seconds.saturating_mul(config.time_attack_bonus_per_second),
        _ => {
            let budget = config.time_bonus_per_pair.saturating_mul(i64::from(pair_count));
            budget
                .saturating_sub(seconds.saturating_mul(config.time_penalty_per_second))
                .max(0)
        }
    }
}

/// Move efficiency bonus, `round(pair_count / moves * multiplier)`.
#[must_use]
pub fn move_bonus(config: &ScoringConfig, pair_count: u32, moves: u32) -> i64 {
    if moves == 0 {
        return 0;
    }
    let numerator = config
        .move_bonus_multiplier
        .saturating_mul(2 * i64::from(pair_count))
        .saturating_add(i64::from(moves));
    numerator / (2 * i64::from(moves))
}

/// Currency for a finished board, before any Daily Challenge bonus.
#[must_use]
pub fn earned_currency(total_score: i64, difficulty: DifficultyType) -> i64 {
    (total_score as f64 / 100.0 * difficulty.currency_multiplier()).floor() as i64
}

/// Fold time, move and currency bonuses into a won board's score.
///
/// No-op unless `is_game_won`. Recomputes from the accumulated match
/// components, so applying it twice gives the same result.
#[must_use]
pub fn apply_final_bonuses(state: &MemoryGameState, elapsed_seconds: u64) -> MemoryGameState {
    if !state.is_game_won {
        return state.clone();
    }

    let config = &state.config;
    let mut breakdown = match state.mode {
        GameMode::HighRoller => ScoreBreakdown {
            match_points: state.banked_score,
            ..ScoreBreakdown::default()
        },
        _ => ScoreBreakdown {
            match_points: state.score_breakdown.match_points,
            combo_bonus: state.score_breakdown.combo_bonus,
            double_down_bonus: state.score_breakdown.double_down_bonus,
            ..ScoreBreakdown::default()
        },
    };

    breakdown.time_bonus = time_bonus(config, state.mode, state.pair_count, elapsed_seconds);
    breakdown.move_bonus = move_bonus(config, state.pair_count, state.moves);
    breakdown.total_score = breakdown.points_sum();

    breakdown.earned_currency = earned_currency(breakdown.total_score, state.difficulty);
    if state.mode == GameMode::DailyChallenge {
        breakdown.daily_challenge_bonus = config.daily_challenge_bonus;
        breakdown.earned_currency += config.daily_challenge_bonus;
    }

    info!(
        total = breakdown.total_score,
        currency = breakdown.earned_currency,
        moves = state.moves,
        "final bonuses applied"
    );

    MemoryGameState {
        score: breakdown.total_score,
        score_breakdown: breakdown,
        ..state.clone()
    }
}
