//! `ix-io` — everything that crosses the process boundary.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`options`]   | `LoadOptions`, `HeaderMode`, `InputFormat`                |
//! | [`loader`]    | `read_vehicles`, `load_vehicles` (text and CSV streams)   |
//! | [`schedule`]  | `write_schedule`, `write_orders`, `read_schedule`         |
//! | [`csv`]       | `ScheduleCsvWriter` (one row per scheduled visit)         |
//! | [`generator`] | `GeneratorConfig`, `generate`, `write_vehicles`           |
//! | [`error`]     | `IoError`, `IoResult<T>`                                  |
//!
//! # Vehicle stream (text)
//!
//! ```text
//! 3              ← only with HeaderMode::Count
//! 0 0 0 1 0      ← id arrival_time start_zone end_zone payment
//! 1 0 2 3 0
//! 2 4 1 0 150
//! ```
//!
//! # Schedule
//!
//! Four lines, zone 0 first, each the zone's vehicle ids in visiting order
//! separated by single spaces.  An unused zone is an empty line.

pub mod csv;
pub mod error;
pub mod generator;
pub mod loader;
pub mod options;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use crate::csv::ScheduleCsvWriter;
pub use error::{IoError, IoResult};
pub use generator::{GeneratorConfig, case_path, generate, write_vehicles};
pub use loader::{load_vehicles, read_vehicles};
pub use options::{HeaderMode, InputFormat, LoadOptions};
pub use schedule::{read_schedule, write_orders, write_schedule};
