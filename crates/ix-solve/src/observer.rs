//! Solve observer trait for progress reporting and diagnostics.

use ix_core::MoveId;
use ix_graph::{ResourceGraph, Strategy};
use ix_schedule::ZoneSchedule;

/// Callbacks invoked by [`Solver::solve`][crate::Solver::solve] at key points
/// of the attempt loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — deadlock counter
///
/// ```rust,ignore
/// struct Deadlocks(u32);
///
/// impl SolveObserver for Deadlocks {
///     fn on_deadlock(&mut self, _: u32, _: Strategy, _: &ResourceGraph, _: &[MoveId]) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SolveObserver {
    /// Called before an attempt builds its graphs.  `attempt` is 1-based.
    fn on_attempt_start(&mut self, _attempt: u32, _strategy: Strategy) {}

    /// Called when an attempt's resource graph has a cycle.  `cycle` lists
    /// the movements of one cycle of `rcg`.
    fn on_deadlock(
        &mut self,
        _attempt:  u32,
        _strategy: Strategy,
        _rcg:      &ResourceGraph,
        _cycle:    &[MoveId],
    ) {}

    /// Called once, after the successful attempt has been scheduled.
    fn on_scheduled(&mut self, _attempts: u32, _strategy: Strategy, _schedule: &ZoneSchedule) {}
}

/// A [`SolveObserver`] that does nothing.
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}
