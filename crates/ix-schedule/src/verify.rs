//! Check externally supplied zone orders against a resolved temporal graph.
//!
//! Zone lists are valid when
//!
//! 1. each lists exactly the vehicles visiting that zone, once each, and
//! 2. the resolved graph plus "each listed visit precedes the next one in
//!    its zone" is still acyclic, i.e. some global execution order honours
//!    every graph edge and every zone list at once.
//!
//! (2) implies that every same-zone graph edge is respected by the list.

use std::collections::VecDeque;

use ix_core::{NodeId, VehicleId, ZONE_COUNT, ZoneId};
use ix_graph::{Adjacency, TemporalGraph};

use crate::{ScheduleError, ScheduleResult};

/// Verify `orders` (indexed by zone) against `tcg`.
pub fn verify_orders(tcg: &TemporalGraph, orders: &[Vec<VehicleId>; ZONE_COUNT]) -> ScheduleResult<()> {
    tcg.require_resolved()?;

    // ── Membership ────────────────────────────────────────────────────────
    let mut listed = vec![false; tcg.node_count()];
    let mut zone_nodes: Vec<Vec<NodeId>> = Vec::with_capacity(ZONE_COUNT);
    for (zone, order) in ZoneId::ALL.into_iter().zip(orders) {
        let mut nodes = Vec::with_capacity(order.len());
        for &vehicle in order {
            let node = tcg
                .find(vehicle, zone)
                .ok_or(ScheduleError::UnexpectedVisit { zone, vehicle })?;
            if std::mem::replace(&mut listed[node.index()], true) {
                return Err(ScheduleError::DuplicateVisit { zone, vehicle });
            }
            nodes.push(node);
        }
        if let Some(missing) = tcg.zone_nodes(zone).find(|n| !listed[n.index()]) {
            return Err(ScheduleError::MissingVisit { zone, vehicle: tcg.node(missing).vehicle });
        }
        zone_nodes.push(nodes);
    }

    // ── Consistency: graph edges + zone chains must stay acyclic ──────────
    let mut pairs: Vec<(usize, NodeId)> = tcg
        .directed_edges()
        .map(|e| (e.from.index(), e.to))
        .collect();
    for nodes in &zone_nodes {
        pairs.extend(nodes.windows(2).map(|w| (w[0].index(), w[1])));
    }
    let adjacency = Adjacency::from_pairs(tcg.node_count(), &pairs);

    let n = tcg.node_count();
    let mut in_degree = vec![0u32; n];
    for &(_, to) in &pairs {
        in_degree[to.index()] += 1;
    }
    let mut queue: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut seen = 0usize;
    while let Some(i) = queue.pop_front() {
        seen += 1;
        for &to in adjacency.row(i) {
            in_degree[to.index()] -= 1;
            if in_degree[to.index()] == 0 {
                queue.push_back(to.index());
            }
        }
    }

    if seen != n {
        return Err(ScheduleError::OrderConflict { remaining: n - seen });
    }
    Ok(())
}
