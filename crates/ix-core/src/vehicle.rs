//! Vehicle value objects.
//!
//! A [`VehicleSpec`] is one record of the input stream.  A [`Vehicle`] is a
//! spec plus the zone path a [`PathPlanner`] produced for it, validated once
//! and immutable afterwards.

use crate::{CoreError, CoreResult, PathPlanner, Tick, VehicleId, ZONE_COUNT, ZoneId};

// ── VehicleSpec ───────────────────────────────────────────────────────────────

/// One vehicle record: `id arrival_time start_zone end_zone payment`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleSpec {
    pub id:      VehicleId,
    pub arrival: Tick,
    pub start:   ZoneId,
    pub end:     ZoneId,
    /// Toll offered by the vehicle.  Carried through for future
    /// prioritisation; the scheduler does not read it.
    pub payment: u64,
}

impl VehicleSpec {
    /// Build a spec, rejecting `start == end`.
    pub fn new(
        id:      VehicleId,
        arrival: Tick,
        start:   ZoneId,
        end:     ZoneId,
        payment: u64,
    ) -> CoreResult<Self> {
        if start == end {
            return Err(CoreError::SameStartEnd { vehicle: id, zone: start });
        }
        Ok(Self { id, arrival, start, end, payment })
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// A vehicle together with the ordered zones it must cross.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    spec: VehicleSpec,
    path: Vec<ZoneId>,
}

impl Vehicle {
    /// Ask `planner` for a path and validate it.
    pub fn plan<P: PathPlanner + ?Sized>(spec: VehicleSpec, planner: &P) -> CoreResult<Self> {
        let path = planner.plan(spec.start, spec.end);
        Self::with_path(spec, path)
    }

    /// Attach an explicit path.
    ///
    /// # Errors
    ///
    /// - [`CoreError::SameStartEnd`] if the spec enters and exits the same zone.
    /// - [`CoreError::InvalidPath`] if the path is shorter than two zones,
    ///   does not run from `start` to `end`, or visits a zone twice.
    pub fn with_path(spec: VehicleSpec, path: Vec<ZoneId>) -> CoreResult<Self> {
        if spec.start == spec.end {
            return Err(CoreError::SameStartEnd { vehicle: spec.id, zone: spec.start });
        }
        let invalid = |reason: String| CoreError::InvalidPath { vehicle: spec.id, reason };

        if path.len() < 2 {
            return Err(invalid(format!("{} zone(s), need at least 2", path.len())));
        }
        if path[0] != spec.start || path[path.len() - 1] != spec.end {
            return Err(invalid(format!(
                "path runs {}..{} but the vehicle enters at {} and exits at {}",
                path[0],
                path[path.len() - 1],
                spec.start,
                spec.end
            )));
        }
        let mut seen = [false; ZONE_COUNT];
        for z in &path {
            if std::mem::replace(&mut seen[z.index()], true) {
                return Err(invalid(format!("zone {z} visited twice")));
            }
        }

        Ok(Self { spec, path })
    }

    #[inline]
    pub fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.spec.id
    }

    #[inline]
    pub fn arrival(&self) -> Tick {
        self.spec.arrival
    }

    #[inline]
    pub fn start(&self) -> ZoneId {
        self.spec.start
    }

    #[inline]
    pub fn end(&self) -> ZoneId {
        self.spec.end
    }

    #[inline]
    pub fn payment(&self) -> u64 {
        self.spec.payment
    }

    /// Zones in traversal order, `start` first and `end` last.
    #[inline]
    pub fn path(&self) -> &[ZoneId] {
        &self.path
    }

    /// `(from, to)` pairs of consecutive zones — one per movement.
    pub fn movements(&self) -> impl Iterator<Item = (ZoneId, ZoneId)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}
