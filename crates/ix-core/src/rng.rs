//! Seedable random source for the randomised tie-break strategy.
//!
//! The solver never touches ambient global randomness: every random
//! resolution draws from a `SolverRng` handed in by the caller, so a run is
//! reproducible from its recorded seed.
//!
//! Independent problems (one per intersection instance) get independent
//! streams via [`SolverRng::for_problem`]:
//!
//!   seed = root_seed XOR (problem_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG used by the random resolution strategy and the test-case
/// generator.
///
/// Not `Sync` on purpose: give each worker its own instance.
pub struct SolverRng(SmallRng);

impl SolverRng {
    pub fn new(seed: u64) -> Self {
        SolverRng(SmallRng::seed_from_u64(seed))
    }

    /// Stream for the `index`-th problem of a batch sharing `root_seed`.
    pub fn for_problem(root_seed: u64, index: usize) -> Self {
        let seed = root_seed ^ (index as u64).wrapping_mul(MIXING_CONSTANT);
        SolverRng(SmallRng::seed_from_u64(seed))
    }

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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
