//! Seeded random number generation for deck dealing and board reshuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deal
//! - **Resumable**: The generator position is captured in `GameRngState`
//!   and stored inside the game state, so a reloaded game reshuffles
//!   exactly like the original would have
//! - **Context streams**: Cosmetic randomness (dealer commentary) draws from
//!   its own stream and never perturbs the deal
//!
//! ```
//! use memory_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut deck_a: Vec<u32> = (0..10).collect();
//! let mut deck_b: Vec<u32> = (0..10).collect();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// SplitMix64 finalizer.
pub(crate) fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic RNG backed by ChaCha8.
///
/// Not a cryptographic source for this engine's purposes: seeds exist so
/// boards can be replayed and shared.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every target. The context is folded in fixed 64-bit little-endian
    /// words, so derived seeds do not depend on pointer width or toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let bytes = context.as_bytes();
        let mut derived = mix(self.seed);
        for chunk in bytes.chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            derived = mix(derived ^ u64::from_le_bytes(word));
        }
        Self::new(mix(derived ^ bytes.len() as u64))
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many shuffles have happened.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

impl GameRngState {
    /// State of a freshly seeded generator.
    #[must_use]
    pub fn fresh(seed: u64) -> Self {
        GameRng::new(seed).state()
    }
}
