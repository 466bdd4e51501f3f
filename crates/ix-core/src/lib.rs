//! `ix-core` — foundational types for the `rust_ix` intersection scheduler.
//!
//! This crate is a dependency of every other `ix-*` crate.  It has no `ix-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `NodeId`, `MoveId`                          |
//! | [`zone`]     | `ZoneId`, `ZONE_COUNT`                                   |
//! | [`time`]     | `Tick`, `Timing`                                         |
//! | [`vehicle`]  | `VehicleSpec` (raw record), `Vehicle` (record + path)    |
//! | [`path`]     | `PathPlanner` trait, `RingPlanner`                       |
//! | [`rng`]      | `SolverRng` (seedable tie-break source)                  |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod path;
pub mod rng;
pub mod time;
pub mod vehicle;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{MoveId, NodeId, VehicleId};
pub use path::{PathPlanner, RingPlanner};
pub use rng::SolverRng;
pub use time::{Tick, Timing};
pub use vehicle::{Vehicle, VehicleSpec};
pub use zone::{ZONE_COUNT, ZoneId};
