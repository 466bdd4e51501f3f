//! The `Solver` and its attempt loop.

use tracing::{debug, info, warn};

use ix_core::{MoveId, SolverRng, Vehicle};
use ix_graph::{ResourceGraph, Strategy, TemporalGraph, find_cycle, resolve};
use ix_schedule::{ZoneSchedule, schedule};

use crate::{SolveError, SolveObserver, SolveResult, SolverConfig};

// ── State ─────────────────────────────────────────────────────────────────────

/// Where the attempt loop currently is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SolveState {
    /// Searching for a deadlock-free resolution.  `attempt` is 1-based and
    /// names the attempt in progress (or the last one, after a failure).
    Resolving { attempt: u32, strategy: Strategy },
    /// A schedule was produced by attempt number `attempts`.
    Scheduled { attempts: u32, strategy: Strategy },
}

// ── Solution ──────────────────────────────────────────────────────────────────

/// Output of a successful solve: the schedule plus the graphs it came from.
#[derive(Debug)]
pub struct Solution {
    pub schedule: ZoneSchedule,
    /// Resolved temporal graph the schedule was computed from.
    pub tcg:      TemporalGraph,
    /// Acyclic resource graph of the successful attempt.
    pub rcg:      ResourceGraph,
    /// Number of attempts, including the successful one.
    pub attempts: u32,
    /// Strategy of the successful attempt.
    pub strategy: Strategy,
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Runs the resolve / detect / retry loop.
///
/// Create via [`SolverBuilder`][crate::SolverBuilder] or [`Solver::new`].
/// A solver can be reused for several inputs; its random stream continues
/// across calls.
pub struct Solver {
    config: SolverConfig,
    rng:    SolverRng,
    state:  SolveState,
}

impl Solver {
    /// Solver with its random stream seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`] if `config` fails [`SolverConfig::validate`].
    pub fn new(config: SolverConfig) -> SolveResult<Self> {
        let rng = SolverRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Solver drawing from a caller-supplied random stream.
    ///
    /// # Errors
    ///
    /// [`SolveError::Config`] if `config` fails [`SolverConfig::validate`].
    pub fn with_rng(config: SolverConfig, rng: SolverRng) -> SolveResult<Self> {
        config.validate()?;
        let state = SolveState::Resolving { attempt: 0, strategy: config.initial_strategy };
        Ok(Self { config, rng, state })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    /// Find a deadlock-free resolution for `vehicles` (in stream order) and
    /// schedule it.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Graph`] for duplicate vehicle ids.
    /// - [`SolveError::Unschedulable`] once `max_attempts` attempts have all
    ///   deadlocked.
    /// - [`SolveError::Schedule`] if the scheduler rejects the graph.
    pub fn solve<O: SolveObserver>(
        &mut self,
        vehicles: &[Vehicle],
        observer: &mut O,
    ) -> SolveResult<Solution> {
        let mut strategy = self.config.initial_strategy;
        let mut attempt: u32 = 0;

        loop {
            if self.config.max_attempts.is_some_and(|max| attempt >= max) {
                warn!(attempts = attempt, "attempt budget exhausted");
                return Err(SolveError::Unschedulable { attempts: attempt });
            }
            attempt += 1;
            self.state = SolveState::Resolving { attempt, strategy };
            observer.on_attempt_start(attempt, strategy);

            // ── Build + resolve + project ─────────────────────────────────
            let mut tcg = TemporalGraph::build(vehicles, &self.config.timing)?;
            resolve(&mut tcg, strategy, &mut self.rng);
            let rcg = ResourceGraph::build(&tcg)?;
            debug!(
                attempt,
                %strategy,
                contested = tcg.contested_count(),
                movements = rcg.move_count(),
                rcg_edges = rcg.edge_count(),
                "resolution attempt"
            );

            // ── Detect ────────────────────────────────────────────────────
            if let Some(cycle) = find_cycle(&rcg) {
                warn!(
                    attempt,
                    %strategy,
                    cycle = %describe_cycle(&rcg, &cycle),
                    "deadlock detected, retrying with {}",
                    self.config.fallback_strategy
                );
                observer.on_deadlock(attempt, strategy, &rcg, &cycle);
                strategy = self.config.fallback_strategy;
                continue;
            }

            // ── Schedule ──────────────────────────────────────────────────
            let schedule = schedule(&tcg, &self.config.timing)?;
            self.state = SolveState::Scheduled { attempts: attempt, strategy };
            info!(
                attempts = attempt,
                %strategy,
                vehicles = tcg.vehicle_count(),
                visits = schedule.visit_count(),
                "scheduled"
            );
            observer.on_scheduled(attempt, strategy, &schedule);

            return Ok(Solution { schedule, tcg, rcg, attempts: attempt, strategy });
        }
    }
}

/// `VehicleId(2) 0→1 ⇒ VehicleId(0) 0→1 ⇒ …` for log output.
fn describe_cycle(rcg: &ResourceGraph, cycle: &[MoveId]) -> String {
    cycle
        .iter()
        .map(|&id| {
            let m = rcg.movement(id);
            format!("{} {}→{}", m.vehicle, m.from_zone, m.to_zone)
        })
        .collect::<Vec<_>>()
        .join(" ⇒ ")
}
