//! `ix-graph` — the conflict graphs behind right-of-way resolution.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`adjacency`] | `Adjacency<T>` (CSR rows shared by both graphs)            |
//! | [`tcg`]       | `TemporalGraph`, `TcgBuilder`, `EdgeKind`, `ContestedPair` |
//! | [`resolve`]   | `Strategy`, `resolve`                                      |
//! | [`rcg`]       | `ResourceGraph`, `Movement`, `RcgRule`                     |
//! | [`deadlock`]  | `has_cycle`, `find_cycle`                                  |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                             |
//!
//! # Pipeline (one resolution attempt)
//!
//! ```text
//! vehicles ──TemporalGraph::build──▶ TCG (contested pairs open)
//!          ──resolve(strategy)─────▶ TCG (every pair oriented)
//!          ──ResourceGraph::build──▶ RCG over movements
//!          ──has_cycle─────────────▶ deadlock?
//! ```
//!
//! Both graphs are flat tables addressed by integer handles; adjacency is a
//! derived CSR index rebuilt with the graph, so nothing holds references
//! into anything else.

pub mod adjacency;
pub mod deadlock;
pub mod error;
pub mod rcg;
pub mod resolve;
pub mod tcg;


pub use adjacency::Adjacency;
pub use deadlock::{find_cycle, has_cycle};
pub use error::{GraphError, GraphResult};
pub use rcg::{Movement, RcgEdge, RcgRule, ResourceGraph};
pub use resolve::{Strategy, resolve};
pub use tcg::{ContestedPair, EdgeKind, Orientation, TcgBuilder, TcgEdge, TcgNode, TemporalGraph};
