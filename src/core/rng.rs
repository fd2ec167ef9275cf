//! Deterministic random number generation for automated players.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical tie-breaks
//! - **Forkable**: Each automated player gets its own stream
//!
//! ```
//! use rust_draughts::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut white = rng.fork();
//!
//! // Forks are reproducible from the parent seed.
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(white.coin_flip(), again.coin_flip());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Generate a random u64 in the given inclusive range.
    pub fn gen_range_u64(&mut self, range: std::ops::RangeInclusive<u64>) -> u64 {
        self.inner.gen_range(range)
    }
}
