//! High Roller circuit stages.

use serde::{Deserialize, Serialize};

/// A stage of the High Roller circuit.
///
/// Later stages deal bigger boards, grow the pot faster, and punish misses
/// harder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CircuitStage {
    #[default]
    Qualifier,
    SemiFinal,
    GrandFinale,
}

impl CircuitStage {
    /// Pairs dealt for this stage.
    #[must_use]
    pub const fn pair_count(self) -> u32 {
        match self {
            CircuitStage::Qualifier => 6,
            CircuitStage::SemiFinal => 8,
            CircuitStage::GrandFinale => 10,
        }
    }

    /// Percentage of the pot lost on a mismatch.
    #[must_use]
    pub const fn bust_penalty_percent(self) -> i64 {
        match self {
            CircuitStage::Qualifier => 20,
            CircuitStage::SemiFinal => 35,
            CircuitStage::GrandFinale => 50,
        }
    }

    /// Fraction `0..1` of the pot lost on a mismatch.
    #[must_use]
    pub fn bust_penalty(self) -> f64 {
        self.bust_penalty_percent() as f64 / 100.0
    }

    /// Factor applied to match points before they enter the pot.
    #[must_use]
    pub const fn pot_growth_multiplier(self) -> i64 {
        match self {
            CircuitStage::Qualifier => 2,
            CircuitStage::SemiFinal => 3,
            CircuitStage::GrandFinale => 5,
        }
    }

    /// Stake a fresh player brings into this stage.
    #[must_use]
    pub const fn buy_in(self) -> i64 {
        match self {
            CircuitStage::Qualifier => 1000,
            CircuitStage::SemiFinal => 2500,
            CircuitStage::GrandFinale => 5000,
        }
    }

    /// The stage after this one, `None` after the Grand Finale.
    #[must_use]
    pub const fn next(self) -> Option<CircuitStage> {
        match self {
            CircuitStage::Qualifier => Some(CircuitStage::SemiFinal),
            CircuitStage::SemiFinal => Some(CircuitStage::GrandFinale),
            CircuitStage::GrandFinale => None,
        }
    }
}
