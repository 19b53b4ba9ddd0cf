use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::Tree;

/// Deterministic value sequences for tests and benchmarks.
pub struct TreeData {
    rng: ChaCha8Rng,
}

impl TreeData {
    /// Creates a generator; equal seeds produce equal sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The values `0..count` in a random order.
    pub fn shuffled(&mut self, count: usize) -> Vec<u64> {
        let mut values: Vec<u64> = (0..count as u64).collect();
        values.shuffle(&mut self.rng);
        values
    }

    /// A tree holding the values `0..count`, inserted in a random order.
    pub fn tree(&mut self, count: usize) -> Tree<u64> {
        self.shuffled(count).into_iter().collect()
    }
}
