//! `ix-cli` — argument parsing and drivers behind the `ixsched` and `ixgen`
//! binaries.
//!
//! The binaries only parse arguments, install logging and call
//! [`sched::run`] or [`casegen::run`]; everything else lives here so it can
//! be tested without spawning processes.
//!
//! Logs go to stderr.  `IX_LOG` takes `EnvFilter` directives
//! (e.g. `IX_LOG=ix_graph=debug`); without it the level is `warn`, raised by
//! each `-v`.

pub mod casegen;
pub mod logging;
pub mod sched;

#[cfg(test)]
mod tests;

pub use casegen::GenArgs;
pub use logging::init_logging;
pub use sched::SchedArgs;
