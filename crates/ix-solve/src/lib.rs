//! `ix-solve` — the orchestration loop that turns a vehicle stream into a
//! deadlock-free zone schedule.
//!
//! # Attempt loop
//!
//! ```text
//! state = Resolving(strategy = config.initial_strategy)
//! loop:
//!   ① Build    — fresh TCG from the vehicle stream.
//!   ② Resolve  — orient every contested pair with `strategy`.
//!   ③ Project  — build the RCG over movements.
//!   ④ Detect   — cycle?  yes → strategy = fallback, retry
//!                        no  → state = Scheduled, run the scheduler once
//! ```
//!
//! Every attempt starts from scratch; the only state carried across attempts
//! is the current strategy and the solver's random stream.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`solve_batch`] solves problems on Rayon's thread pool. |
//! | `serde`    | `SolverConfig` derives `Serialize`/`Deserialize`.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_solve::{NoopObserver, SolverBuilder};
//!
//! let mut solver = SolverBuilder::new().seed(7).max_attempts(500).build()?;
//! let solution = solver.solve(&vehicles, &mut NoopObserver)?;
//! for zone in ZoneId::ALL {
//!     println!("{:?}", solution.schedule.order(zone));
//! }
//! ```

pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod solver;


pub use batch::solve_batch;
pub use builder::SolverBuilder;
pub use config::SolverConfig;
pub use error::{SolveError, SolveResult};
pub use observer::{NoopObserver, SolveObserver};
pub use solver::{Solution, SolveState, Solver};
