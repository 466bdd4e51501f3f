//! Contention resolution strategies.
//!
//! A [`Strategy`] is plain data: the orchestration loop picks one per
//! attempt and hands it to [`resolve`] together with the random source, so
//! swapping strategies never touches the graph type.

use std::fmt;
use std::str::FromStr;

use ix_core::SolverRng;

use crate::{Orientation, TemporalGraph};

/// Tie-break policy for contested same-zone orderings.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// First come, first served: the lower vehicle id goes first.
    /// Deterministic and idempotent.
    #[default]
    Fcfs,
    /// Each pair independently picks a direction with probability ½.
    Random,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Fcfs   => "fcfs",
            Strategy::Random => "random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs"   => Ok(Strategy::Fcfs),
            "random" => Ok(Strategy::Random),
            other    => Err(format!("unknown strategy {other:?}: expected \"fcfs\" or \"random\"")),
        }
    }
}

/// Orient every contested pair of `tcg` according to `strategy`.
///
/// Afterwards each pair has exactly one direction; earlier choices are
/// overwritten.  `rng` is only drawn from by [`Strategy::Random`], one draw
/// per pair in pair order, so a recorded seed reproduces the resolution.
pub fn resolve(tcg: &mut TemporalGraph, strategy: Strategy, rng: &mut SolverRng) {
    match strategy {
        Strategy::Fcfs => {
            let orientations: Vec<Orientation> = tcg
                .contested()
                .iter()
                .map(|p| {
                    if tcg.node(p.first).vehicle < tcg.node(p.second).vehicle {
                        Orientation::Forward
                    } else {
                        Orientation::Backward
                    }
                })
                .collect();
            for (pair, o) in tcg.contested_mut().iter_mut().zip(orientations) {
                pair.commit(o);
            }
        }
        Strategy::Random => {
            for pair in tcg.contested_mut() {
                let o = if rng.gen_bool(0.5) { Orientation::Forward } else { Orientation::Backward };
                pair.commit(o);
            }
        }
    }
}
