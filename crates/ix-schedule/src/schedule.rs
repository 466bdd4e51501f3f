//! Kahn's topological sort over the resolved temporal graph.
//!
//! # Ready times
//!
//! ```text
//! ready(entry node)  = arrival + enter_zone
//! ready(other node)  = max over predecessors p of
//!                        ready(p) + change_zone   (sequential edge)
//!                        ready(p) + wait          (arrival-order / contention)
//! completion(zone)   = max ready time scheduled into the zone
//! ```
//!
//! These are coarse estimates for display, not wall-clock guarantees.
//!
//! # Tie-breaking
//!
//! Zero-in-degree nodes are served FIFO, seeded in `NodeId` order, and
//! adjacency rows keep edge creation order.  A fixed resolved graph
//! therefore always yields the same schedule.

use std::collections::VecDeque;

use tracing::debug;

use ix_core::{NodeId, Timing, VehicleId, ZONE_COUNT, ZoneId};
use ix_graph::{EdgeKind, TemporalGraph};

use crate::{ScheduleError, ScheduleResult};

/// One vehicle's turn in a zone.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledVisit {
    pub vehicle:    VehicleId,
    /// TCG node of this visit.  Only meaningful for the graph that was
    /// scheduled.
    pub node:       NodeId,
    pub ready_time: f64,
}

/// The visiting order of every zone.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSchedule {
    zones: [Vec<ScheduledVisit>; ZONE_COUNT],
}

impl ZoneSchedule {
    /// Four empty zone lists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Visits of `zone`, in order.
    pub fn zone(&self, zone: ZoneId) -> &[ScheduledVisit] {
        &self.zones[zone.index()]
    }

    /// Vehicle ids of `zone`, in order.
    pub fn order(&self, zone: ZoneId) -> Vec<VehicleId> {
        self.zones[zone.index()].iter().map(|v| v.vehicle).collect()
    }

    /// Vehicle ids of every zone, indexed by zone.
    pub fn orders(&self) -> [Vec<VehicleId>; ZONE_COUNT] {
        ZoneId::ALL.map(|z| self.order(z))
    }

    /// Latest ready time scheduled into `zone`; `0.0` for an unused zone.
    pub fn completion_estimate(&self, zone: ZoneId) -> f64 {
        self.zones[zone.index()]
            .iter()
            .map(|v| v.ready_time)
            .fold(0.0, f64::max)
    }

    /// Total visits across all zones.
    pub fn visit_count(&self) -> usize {
        self.zones.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.visit_count() == 0
    }
}

/// Order every node of `tcg` into its zone's list.
///
/// # Errors
///
/// - [`ScheduleError::Graph`] if a contested pair is still open.
/// - [`ScheduleError::NotAcyclic`] if fewer than all nodes could be
///   ordered.  Cannot happen once the resource graph of `tcg` was found
///   acyclic.
pub fn schedule(tcg: &TemporalGraph, timing: &Timing) -> ScheduleResult<ZoneSchedule> {
    let adjacency = tcg.adjacency()?;
    let n = tcg.node_count();

    let mut in_degree = vec![0u32; n];
    for row in 0..n {
        for &(to, _) in adjacency.row(row) {
            in_degree[to.index()] += 1;
        }
    }

    let mut ready: Vec<f64> = tcg.nodes().iter().map(|n| n.ready_time.unwrap_or(0.0)).collect();
    let mut queue: VecDeque<NodeId> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(|i| NodeId(i as u32))
        .collect();

    let mut out = ZoneSchedule::empty();
    let mut scheduled = 0usize;

    while let Some(id) = queue.pop_front() {
        let node = tcg.node(id);
        out.zones[node.zone.index()].push(ScheduledVisit {
            vehicle:    node.vehicle,
            node:       id,
            ready_time: ready[id.index()],
        });
        scheduled += 1;

        for &(to, kind) in adjacency.row(id.index()) {
            let gap = match kind {
                EdgeKind::Sequential => timing.change_zone,
                EdgeKind::ArrivalOrder | EdgeKind::QueueOrder | EdgeKind::Contention => timing.wait,
            };
            ready[to.index()] = ready[to.index()].max(ready[id.index()] + gap);

            in_degree[to.index()] -= 1;
            if in_degree[to.index()] == 0 {
                queue.push_back(to);
            }
        }
    }

    if scheduled != n {
        return Err(ScheduleError::NotAcyclic { scheduled, total: n });
    }

    debug!(
        visits = scheduled,
        zone0 = out.zones[0].len(),
        zone1 = out.zones[1].len(),
        zone2 = out.zones[2].len(),
        zone3 = out.zones[3].len(),
        "schedule computed"
    );
    Ok(out)
}
