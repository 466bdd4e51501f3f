//! Path planning trait and the default ring planner.
//!
//! # Pluggability
//!
//! The scheduler never looks inside a planner; it only consumes the ordered
//! zone sequence.  [`Vehicle::plan`][crate::Vehicle::plan] validates whatever
//! a planner returns, so a faulty planner surfaces as
//! [`CoreError::InvalidPath`][crate::CoreError::InvalidPath] rather than as a
//! corrupted graph.

use crate::ZoneId;

/// Maps an entry and exit zone to the ordered zones a vehicle traverses.
///
/// The returned path must start at `start`, end at `end`, contain at least
/// two zones and visit no zone twice.
///
/// Implementations must be `Send + Sync` so independent problems can be
/// solved on worker threads with a shared planner.
pub trait PathPlanner: Send + Sync {
    fn plan(&self, start: ZoneId, end: ZoneId) -> Vec<ZoneId>;
}

/// Closures are planners, which keeps one-off planners in tests short.
impl<F> PathPlanner for F
where
    F: Fn(ZoneId, ZoneId) -> Vec<ZoneId> + Send + Sync,
{
    fn plan(&self, start: ZoneId, end: ZoneId) -> Vec<ZoneId> {
        self(start, end)
    }
}

/// Walks the ring `z → z + 1 (mod 4)` from `start` until it reaches `end`.
///
/// A right turn crosses one zone boundary, going straight two, a left turn
/// three.
#[derive(Copy, Clone, Debug, Default)]
pub struct RingPlanner;

impl PathPlanner for RingPlanner {
    fn plan(&self, start: ZoneId, end: ZoneId) -> Vec<ZoneId> {
        let mut path = vec![start];
        let mut cur = start;
        while cur != end {
            cur = cur.next();
            path.push(cur);
        }
        path
    }
}
