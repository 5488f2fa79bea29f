//! Itemized score result.

use serde::{Deserialize, Serialize};

/// Every component of a score.
///
/// In every mode `total_score` equals the state's `score` at all times.
/// During play the match components accumulate, except in High Roller where
/// points live in the pot and bank until the board is won. Once a board is
/// won, `apply_final_bonuses` fills in the remaining components and fixes
/// `total_score` to the final score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    /// Base points from matches (High Roller: the banked winnings).
    pub match_points: i64,
    pub time_bonus: i64,
    pub move_bonus: i64,
    /// Streak bonus accumulated across matches.
    pub combo_bonus: i64,
    /// Extra points won on Double Down hits.
    pub double_down_bonus: i64,
    /// Flat currency bonus for a finished Daily Challenge.
    pub daily_challenge_bonus: i64,
    pub earned_currency: i64,
    pub total_score: i64,
}

impl ScoreBreakdown {
    /// Sum of the point components (currency is not points).
    #[must_use]
    pub fn points_sum(&self) -> i64 {
        [
            self.match_points,
            self.combo_bonus,
            self.double_down_bonus,
            self.time_bonus,
            self.move_bonus,
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }
}
