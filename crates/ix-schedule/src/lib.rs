//! `ix-schedule` — turn a resolved, deadlock-free temporal graph into one
//! visiting order per zone.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`schedule`] | `schedule`, `ZoneSchedule`, `ScheduledVisit`          |
//! | [`verify`]   | `verify_orders` (checks zone lists against a TCG)     |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                  |

pub mod error;
pub mod schedule;
pub mod verify;


pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{ScheduledVisit, ZoneSchedule, schedule};
pub use verify::verify_orders;
