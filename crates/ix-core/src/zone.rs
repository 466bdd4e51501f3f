//! The fixed four-zone intersection.
//!
//! ```text
//!        │ 0 │ 3 │
//!     ───┼───┼───┼───
//!        │ 1 │ 2 │
//! ```
//!
//! Zones are numbered so that `z → z + 1 (mod 4)` walks the ring; the
//! default [`RingPlanner`][crate::RingPlanner] relies on this.

use std::fmt;

use crate::CoreError;

/// Number of zones in the intersection.
pub const ZONE_COUNT: usize = 4;

/// One of the four shared zones.  Always in `0..ZONE_COUNT`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ZoneId(u8);

impl ZoneId {
    /// All zones in id order.
    pub const ALL: [ZoneId; ZONE_COUNT] = [ZoneId(0), ZoneId(1), ZoneId(2), ZoneId(3)];

    /// `None` if `n` is not a valid zone number.
    #[inline]
    pub fn new(n: u8) -> Option<ZoneId> {
        ((n as usize) < ZONE_COUNT).then_some(ZoneId(n))
    }

    #[inline(always)]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Cast to `usize` for indexing per-zone arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Successor on the ring.
    #[inline]
    pub fn next(self) -> ZoneId {
        ZoneId((self.0 + 1) % ZONE_COUNT as u8)
    }
}

impl TryFrom<u8> for ZoneId {
    type Error = CoreError;
    fn try_from(n: u8) -> Result<ZoneId, CoreError> {
        ZoneId::new(n).ok_or(CoreError::InvalidZone(n as u64))
    }
}

impl TryFrom<u64> for ZoneId {
    type Error = CoreError;
    fn try_from(n: u64) -> Result<ZoneId, CoreError> {
        u8::try_from(n)
            .ok()
            .and_then(ZoneId::new)
            .ok_or(CoreError::InvalidZone(n))
    }
}

impl From<ZoneId> for u8 {
    fn from(z: ZoneId) -> u8 {
        z.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
