//! Random number generation for dungeon generation
//!
//! Uses a seeded ChaCha RNG so a seed always yields the same dungeon.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The randomness the generator consumes.
///
/// Draw order matters for reproducibility: the pipeline makes every call in a
/// fixed sequence, so one source must not be shared with other consumers.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Returns `low` when `high <= low`.
    fn next_int(&mut self, low: usize, high: usize) -> usize;

    /// Shuffle a slice in place
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i);
            items.swap(i, j);
        }
    }

    /// Uniform index into a collection of `len` items, `None` if empty
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.next_int(0, len - 1))
    }
}

/// Seeded dungeon RNG over ChaCha8Rng
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this stream started from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DungeonRng {
    fn next_int(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}
