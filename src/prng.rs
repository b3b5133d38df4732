//! The random stream consumed by the generators.
//!
//! The generators only ever draw through [`RandomSource`], so any seeded
//! source can drive them; [`SeededRng`] is the one the crate ships.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// A uniform integer in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// True with probability `numerator / denominator`.
    fn chance(&mut self, numerator: u32, denominator: u32) -> bool;

    /// The seed this stream was created from, for error reports.
    fn seed(&self) -> u64;

    /// A uniformly chosen element, leaving the slice untouched.
    fn sample<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.next_below(items.len() as u32) as usize;
        items.get(index)
    }

    /// Remove and return a uniformly chosen element.
    ///
    /// The last element is swapped into the hole, so the order of the
    /// remaining elements is not preserved.
    fn sample_remove<T>(&mut self, items: &mut Vec<T>) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.next_below(items.len() as u32) as usize;
        Some(items.swap_remove(index))
    }
}

/// ChaCha8-backed stream; the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A stream seeded from the operating system, for callers that don't care.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl RandomSource for SeededRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }

    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        if numerator >= denominator {
            return true;
        }
        self.rng.random_ratio(numerator, denominator)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
