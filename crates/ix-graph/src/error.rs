//! Graph-subsystem error type.

use thiserror::Error;

use ix_core::{VehicleId, ZoneId};

/// Errors produced by `ix-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{0} appears more than once in the vehicle stream")]
    DuplicateVehicle(VehicleId),

    /// A contested pair reached a consumer that needs a fully oriented graph.
    /// Always a programming error: `resolve` orients every pair.
    #[error("contention between {first} and {second} at zone {zone} was never resolved")]
    UnresolvedContention {
        zone:   ZoneId,
        first:  VehicleId,
        second: VehicleId,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
