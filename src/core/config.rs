//! Game configuration types.
//!
//! - `ScoringConfig`: every scoring tunable, immutable once a game starts
//! - `GameMode`: which rule set layers on top of the flip/match engine
//! - `DifficultyType`: currency multiplier and suggested board size
//! - `SessionConfig`: timing knobs used only by the session orchestrator
//!
//! All types are serde-serializable. Fields carry `#[serde(default)]` so
//! snapshots written before a tunable existed still load.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Upper bound on any single point tunable.
///
/// With the largest board, the longest streak and the highest stake, scores
/// stay far below `i64::MAX` across a whole High Roller circuit.
pub const MAX_POINT_VALUE: i64 = 1_000_000_000;

/// Upper bound on the Double Down stake factor.
pub const MAX_DOUBLE_DOWN_STAKE: i64 = 100;

/// Game mode. Encoded by name in snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Casual play, no clock pressure.
    #[default]
    Standard,
    /// Countdown clock; remaining time converts to bonus points.
    TimeAttack,
    /// Seeded board of the day with rule mutators.
    DailyChallenge,
    /// Circuit gambling: matches feed an at-risk pot.
    HighRoller,
}

/// Difficulty tier. Scales the currency earned from a finished board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyType {
    Tourist,
    #[default]
    Casual,
    Master,
    Shark,
}

impl DifficultyType {
    /// Multiplier applied to `total_score / 100` to get earned currency.
    #[must_use]
    pub const fn currency_multiplier(self) -> f64 {
        match self {
            DifficultyType::Tourist => 0.25,
            DifficultyType::Casual => 1.0,
            DifficultyType::Master => 2.5,
            DifficultyType::Shark => 5.0,
        }
    }

    /// Board size suggested for this tier.
    #[must_use]
    pub const fn default_pair_count(self) -> u32 {
        match self {
            DifficultyType::Tourist => 4,
            DifficultyType::Casual => 6,
            DifficultyType::Master => 8,
            DifficultyType::Shark => 12,
        }
    }
}

/// Scoring tunables.
///
/// Use `ScoringConfig::default()` and the `with_*` builders to adjust
/// individual values:
///
/// ```
/// use memory_engine::core::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_base_match_points(100)
///     .with_heat_mode_threshold(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for any successful match.
    pub base_match_points: i64,

    /// Per-match streak bonus, scaled by the square of the combo level.
    pub combo_bonus_points: i64,

    /// Time bonus budget per pair (non-Time-Attack modes).
    pub time_bonus_per_pair: i64,

    /// Deducted from the time bonus per elapsed second.
    pub time_penalty_per_second: i64,

    /// Scales `pair_count / moves` into the move-efficiency bonus.
    pub move_bonus_multiplier: i64,

    /// Combo level that unlocks Double Down (Heat Mode).
    pub heat_mode_threshold: u32,

    /// Stake factor of a Double Down. A hit multiplies the match increment
    /// by this factor; a miss forfeits the whole score.
    pub double_down_penalty: i64,

    /// Combo level reported as a High Roller streak.
    pub high_roller_threshold: u32,

    /// Combo level at which the High Roller pot is banked automatically.
    pub the_nuts_threshold: u32,

    /// Bonus per remaining second in Time Attack.
    pub time_attack_bonus_per_second: i64,

    /// Flat currency bonus for finishing the Daily Challenge.
    pub daily_challenge_bonus: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_match_points: 100,
            combo_bonus_points: 50,
            time_bonus_per_pair: 50,
            time_penalty_per_second: 2,
            move_bonus_multiplier: 5000,
            heat_mode_threshold: 3,
            double_down_penalty: 2,
            high_roller_threshold: 5,
            the_nuts_threshold: 5,
            time_attack_bonus_per_second: 10,
            daily_challenge_bonus: 500,
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub fn with_base_match_points(mut self, points: i64) -> Self {
        self.base_match_points = points;
        self
    }

    #[must_use]
    pub fn with_combo_bonus_points(mut self, points: i64) -> Self {
        self.combo_bonus_points = points;
        self
    }

    #[must_use]
    pub fn with_time_bonus(mut self, per_pair: i64, penalty_per_second: i64) -> Self {
        self.time_bonus_per_pair = per_pair;
        self.time_penalty_per_second = penalty_per_second;
        self
    }

    #[must_use]
    pub fn with_move_bonus_multiplier(mut self, multiplier: i64) -> Self {
        self.move_bonus_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_heat_mode_threshold(mut self, threshold: u32) -> Self {
        self.heat_mode_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_double_down_penalty(mut self, factor: i64) -> Self {
        self.double_down_penalty = factor;
        self
    }

    #[must_use]
    pub fn with_high_roller_threshold(mut self, threshold: u32) -> Self {
        self.high_roller_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_the_nuts_threshold(mut self, threshold: u32) -> Self {
        self.the_nuts_threshold = threshold;
        self
    }

    /// Reject tunables that would make scoring meaningless or overflow.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("base_match_points", self.base_match_points),
            ("combo_bonus_points", self.combo_bonus_points),
            ("time_bonus_per_pair", self.time_bonus_per_pair),
            ("time_penalty_per_second", self.time_penalty_per_second),
            ("move_bonus_multiplier", self.move_bonus_multiplier),
            ("time_attack_bonus_per_second", self.time_attack_bonus_per_second),
            ("daily_challenge_bonus", self.daily_challenge_bonus),
        ];
        if let Some((name, value)) = non_negative
            .iter()
            .find(|(_, v)| !(0..=MAX_POINT_VALUE).contains(v))
        {
            return Err(EngineError::InvalidConfig(format!(
                "{name} must be between 0 and {MAX_POINT_VALUE}, got {value}"
            )));
        }
        if !(1..=MAX_DOUBLE_DOWN_STAKE).contains(&self.double_down_penalty) {
            return Err(EngineError::InvalidConfig(format!(
                "double_down_penalty must be between 1 and {MAX_DOUBLE_DOWN_STAKE}, got {}",
                self.double_down_penalty
            )));
        }
        if self.the_nuts_threshold == 0 {
            return Err(EngineError::InvalidConfig(
                "the_nuts_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Orchestrator timing. The engine itself never reads a clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long every card is shown before play starts.
    pub peek_duration: Duration,

    /// How long a mismatched pair stays visible before flipping back.
    pub mismatch_delay: Duration,

    /// Countdown budget for Time Attack.
    pub time_attack_budget: Duration,

    /// Misses without a match that trigger a Mirage reshuffle.
    pub mirage_interval: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            peek_duration: Duration::from_millis(3000),
            mismatch_delay: Duration::from_millis(800),
            time_attack_budget: Duration::from_secs(60),
            mirage_interval: 5,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_peek_duration(mut self, duration: Duration) -> Self {
        self.peek_duration = duration;
        self
    }

    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    #[must_use]
    pub fn with_time_attack_budget(mut self, budget: Duration) -> Self {
        self.time_attack_budget = budget;
        self
    }
}
