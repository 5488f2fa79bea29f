//! Scoring: per-match points, Double Down math, and end-of-board bonuses.

pub mod breakdown;
pub mod calculator;

pub use breakdown::ScoreBreakdown;
pub use calculator::{
    apply_final_bonuses, calculate_match_score, combo_bonus, earned_currency, move_bonus,
    time_bonus, MatchScore,
};
