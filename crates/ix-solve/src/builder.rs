//! Fluent builder for constructing a [`Solver`].

use ix_core::{SolverRng, Timing};
use ix_graph::Strategy;

use crate::{SolveResult, Solver, SolverConfig};

/// Fluent builder for [`Solver`].
///
/// Every input is optional:
///
/// | Method                | Default                         |
/// |-----------------------|---------------------------------|
/// | `.strategy(s)`        | `Strategy::Fcfs`                |
/// | `.fallback(s)`        | `Strategy::Random`              |
/// | `.max_attempts(n)`    | `10_000`                        |
/// | `.unbounded()`        | bounded                         |
/// | `.seed(n)`            | `42`                            |
/// | `.timing(t)`          | `Timing::default()`             |
/// | `.rng(r)`             | `SolverRng::new(seed)`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut solver = SolverBuilder::new()
///     .strategy(Strategy::Random)
///     .seed(7)
///     .build()?;
/// let solution = solver.solve(&vehicles, &mut NoopObserver)?;
/// ```
#[derive(Default)]
pub struct SolverBuilder {
    config: SolverConfig,
    rng:    Option<SolverRng>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SolverConfig) -> Self {
        Self { config, rng: None }
    }

    /// Strategy of the first attempt.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.initial_strategy = strategy;
        self
    }

    /// Strategy used after a deadlock.
    pub fn fallback(mut self, strategy: Strategy) -> Self {
        self.config.fallback_strategy = strategy;
        self
    }

    pub fn max_attempts(mut self, n: u32) -> Self {
        self.config.max_attempts = Some(n);
        self
    }

    /// Retry until a deadlock-free resolution is found, however long that
    /// takes.
    pub fn unbounded(mut self) -> Self {
        self.config.max_attempts = None;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.config.timing = timing;
        self
    }

    /// Draw from `rng` instead of a stream seeded from the configured seed.
    pub fn rng(mut self, rng: SolverRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Solver`].
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`][crate::SolveError::Config] if the
    /// configuration fails [`SolverConfig::validate`].
    pub fn build(self) -> SolveResult<Solver> {
        match self.rng {
            Some(rng) => Solver::with_rng(self.config, rng),
            None      => Solver::new(self.config),
        }
    }
}
