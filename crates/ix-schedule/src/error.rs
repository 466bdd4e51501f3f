use thiserror::Error;

use ix_core::{VehicleId, ZoneId};
use ix_graph::GraphError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Kahn's algorithm stalled: the graph handed in was not a DAG.
    #[error("graph is not acyclic: only {scheduled} of {total} visits could be ordered")]
    NotAcyclic { scheduled: usize, total: usize },

    #[error("zone {zone} lists {vehicle}, which never visits it")]
    UnexpectedVisit { zone: ZoneId, vehicle: VehicleId },

    #[error("zone {zone} lists {vehicle} more than once")]
    DuplicateVisit { zone: ZoneId, vehicle: VehicleId },

    #[error("zone {zone} omits {vehicle}")]
    MissingVisit { zone: ZoneId, vehicle: VehicleId },

    #[error("zone orders contradict the resolved graph ({remaining} visits can never proceed)")]
    OrderConflict { remaining: usize },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
