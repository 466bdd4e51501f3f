//! Solving many independent problems at once.
//!
//! Problems share nothing: each gets its own solver and its own random
//! stream, derived from `config.seed` and the problem's index, so the result
//! of problem `i` does not depend on the batch size, on the other problems,
//! or on whether the batch ran in parallel.

use ix_core::{SolverRng, Vehicle};

use crate::{NoopObserver, SolveResult, Solution, SolverBuilder, SolverConfig};

/// Solve every problem of `problems` with `config`.  Results are in input
/// order; an invalid `config` fails every problem with the same
/// [`SolveError::Config`][crate::SolveError::Config].
pub fn solve_batch(problems: &[Vec<Vehicle>], config: &SolverConfig) -> Vec<SolveResult<Solution>> {
    let solve_one = |(index, vehicles): (usize, &Vec<Vehicle>)| -> SolveResult<Solution> {
        let rng = SolverRng::for_problem(config.seed, index);
        SolverBuilder::from_config(config.clone())
            .rng(rng)
            .build()?
            .solve(vehicles, &mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    {
        problems.iter().enumerate().map(solve_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        problems.par_iter().enumerate().map(solve_one).collect()
    }
}
