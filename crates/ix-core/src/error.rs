//! Core error type.
//!
//! Sub-crates define their own error enums; the loader reports a
//! `CoreError` as the reason of the malformed record that caused it.

use thiserror::Error;

use crate::{VehicleId, ZoneId};

/// Errors raised while constructing core value types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("zone {0} is outside the zone set 0..=3")]
    InvalidZone(u64),

    #[error("{vehicle} starts and ends in zone {zone}")]
    SameStartEnd { vehicle: VehicleId, zone: ZoneId },

    #[error("invalid path for {vehicle}: {reason}")]
    InvalidPath { vehicle: VehicleId, reason: String },
}

/// Shorthand result type for `ix-core`.
pub type CoreResult<T> = Result<T, CoreError>;
