//! Solver configuration.

use ix_core::Timing;
use ix_graph::Strategy;

use crate::{SolveError, SolveResult};

/// Knobs of the attempt loop.
///
/// | Field               | Default          |
/// |---------------------|------------------|
/// | `initial_strategy`  | `Strategy::Fcfs`   |
/// | `fallback_strategy` | `Strategy::Random` |
/// | `max_attempts`      | `Some(10_000)`   |
/// | `seed`              | `42`             |
/// | `timing`            | `Timing::default()` |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Strategy of the first attempt.
    pub initial_strategy: Strategy,

    /// Strategy of every attempt after a deadlock.
    pub fallback_strategy: Strategy,

    /// Give up after this many deadlocked attempts.  `None` retries forever,
    /// which may not terminate on pathological inputs.
    pub max_attempts: Option<u32>,

    /// Seed of the random stream used by [`Strategy::Random`].  The same
    /// seed and input always reproduce the same resolution.
    pub seed: u64,

    pub timing: Timing,
}

impl SolverConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
    pub const DEFAULT_SEED: u64 = 42;

    /// Reject settings the attempt loop cannot run with.
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`] if `max_attempts` is `Some(0)` or a timing
    /// constant is negative or not finite.
    pub fn validate(&self) -> SolveResult<()> {
        if self.max_attempts == Some(0) {
            return Err(SolveError::Config("max_attempts must be at least 1".into()));
        }
        let t = self.timing;
        for (name, value) in [
            ("enter_zone", t.enter_zone),
            ("change_zone", t.change_zone),
            ("wait", t.wait),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SolveError::Config(format!(
                    "timing.{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_strategy:  Strategy::Fcfs,
            fallback_strategy: Strategy::Random,
            max_attempts:      Some(Self::DEFAULT_MAX_ATTEMPTS),
            seed:              Self::DEFAULT_SEED,
            timing:            Timing::default(),
        }
    }
}
