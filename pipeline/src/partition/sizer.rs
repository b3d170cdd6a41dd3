//! Slice-size sources for the partitioner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Picks the size of the next category.
pub trait SliceSizer: Send {
    /// Returns a size for the next slice, given `remaining > 0` unassigned
    /// frames. The partitioner clamps the answer to `[1, remaining]`.
    fn next_size(&mut self, remaining: usize) -> usize;
}

/// Uniform draws from `[1, remaining]`.
pub struct RandomSizer<R: Rng> {
    rng: R,
}

/// The sizer used outside tests.
pub type StdRandomSizer = RandomSizer<StdRng>;

impl<R: Rng> RandomSizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSizer<StdRng> {
    /// Reproducible sizer.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> SliceSizer for RandomSizer<R> {
    fn next_size(&mut self, remaining: usize) -> usize {
        if remaining == 0 {
            return 0;
        }
        self.rng.gen_range(1..=remaining)
    }
}

/// Replays a fixed list of draws, then takes everything that is left.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSizer {
    draws: VecDeque<usize>,
}

impl ScriptedSizer {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl SliceSizer for ScriptedSizer {
    fn next_size(&mut self, remaining: usize) -> usize {
        self.draws.pop_front().unwrap_or(remaining)
    }
}
