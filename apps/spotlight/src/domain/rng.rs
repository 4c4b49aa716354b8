//! Injectable randomness for prompt draws and turn-order shuffles.
//!
//! Production wiring uses [`EntropySource`]; tests use [`SeededSource`] for
//! reproducible runs or [`ScriptedSource`] to dictate every choice.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource: Send {
    /// Returns an index in `0..bound`. Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// OS-seeded generator for real games.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Deterministic generator: the same seed yields the same session.
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed list of choices, each reduced modulo the requested bound.
/// Once exhausted it keeps answering `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    choices: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// A source that always picks index 0: identity shuffles, first prompt.
    pub fn zeros() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.choices.pop_front().map_or(0, |c| c % bound)
    }
}
