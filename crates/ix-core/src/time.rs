//! Arrival ticks and crossing latencies.
//!
//! Arrivals are integer simulation ticks.  Everything derived from them
//! (node ready times, per-zone completion estimates) is an `f64` in the same
//! unit, because the fixed latencies in [`Timing`] are fractional.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Timing ────────────────────────────────────────────────────────────────────

/// Fixed-duration crossing model.
///
/// | Field         | Meaning                                              |
/// |---------------|------------------------------------------------------|
/// | `enter_zone`  | arrival → ready to occupy the first zone             |
/// | `change_zone` | leaving one zone of the path → ready for the next    |
/// | `wait`        | zone released by one vehicle → usable by the next    |
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    pub enter_zone:  f64,
    pub change_zone: f64,
    pub wait:        f64,
}

impl Timing {
    /// Ready time of a vehicle's entry node.
    #[inline]
    pub fn entry_ready(&self, arrival: Tick) -> f64 {
        arrival.as_f64() + self.enter_zone
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter_zone:  1.4,
            change_zone: 0.85,
            wait:        0.2,
        }
    }
}
