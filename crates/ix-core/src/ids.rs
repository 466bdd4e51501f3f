//! Strongly typed identifier wrappers.
//!
//! `VehicleId` is the id read from the input stream.  The graph handles
//! (`NodeId`, `MoveId`) are positions in the flat tables of the
//! temporal and resource graphs; they are only meaningful for the graph that
//! issued them.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Vehicle identifier as it appears in the input stream.  Unique per
    /// problem, but not necessarily dense or sorted by arrival.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a (vehicle, zone) visit in a temporal conflict graph.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a movement (zone → next zone of one vehicle) in a resource
    /// conflict graph.
    pub struct MoveId(u32);
}
