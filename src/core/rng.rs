//! Deterministic random number generation for starting-player selection.
//!
//! The only nondeterminism in the engine is the coin flip that picks a
//! round's starting player. It lives behind this wrapper so tests can
//! inject a seeded source and replay identical sequences.
//!
//! ## Usage
//!
//! ```
//! use gomoku_core::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same flips.
//! for _ in 0..32 {
//!     assert_eq!(a.coin_flip(), b.coin_flip());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::Player;

/// Seedable RNG wrapper.
///
/// Uses ChaCha8 for speed while keeping high-quality, platform-independent
/// output. `Clone` captures the full stream position, so a cloned rng
/// continues exactly where the original was.
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

    /// Create a new RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Unbiased coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Pick a starting player with an unbiased coin flip.
    pub fn pick_starter(&mut self) -> Player {
        if self.coin_flip() {
            Player::Black
        } else {
            Player::White
        }
    }
}
