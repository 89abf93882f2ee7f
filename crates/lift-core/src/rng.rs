//! Deterministic RNG wrapper for scenario generation.
//!
//! Scenario construction is the only random part of the simulator, and it
//! must be reproducible: the same seed always yields the same building and
//! the same passengers.  Wrapping `SmallRng` behind a seeded constructor
//! keeps thread-local entropy (`rand::thread_rng`) out of the codebase.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Floor;

/// Simulation-level deterministic RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly random floor in a building with `floor_count` floors.
    ///
    /// # Panics
    /// Panics if `floor_count` is 0.
    #[inline]
    pub fn random_floor(&mut self, floor_count: usize) -> Floor {
        debug_assert!(floor_count <= u8::MAX as usize + 1);
        Floor(self.0.gen_range(0..floor_count) as u8)
    }
}
