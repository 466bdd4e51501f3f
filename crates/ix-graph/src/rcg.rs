//! Resource conflict graph (RCG).
//!
//! One node per *movement*: a vehicle going from one zone of its path to the
//! next (one per sequential TCG edge).  Edges never invent an ordering; each
//! one copies the direction of a committed TCG edge between zone nodes the
//! two movements touch:
//!
//! | Rule | Coincidence                       | Direction taken from           |
//! |------|-----------------------------------|--------------------------------|
//! | a    | same vehicle, consecutive moves   | always earlier → later         |
//! | b    | start of A = start of B           | TCG edge between the starts    |
//! | c    | end of A = end of B               | TCG edge between the ends      |
//! | d    | start of A = end of B             | TCG edge start(A) ↔ end(B)     |
//! | e    | end of A = start of B             | TCG edge end(A) ↔ start(B)     |
//!
//! A pair of movements may match several rules and then gets several edges;
//! the cycle detector tolerates multi-edges.

use rustc_hash::FxHashSet;
use tracing::debug;

use ix_core::{MoveId, NodeId, VehicleId, ZONE_COUNT, ZoneId};

use crate::{Adjacency, EdgeKind, GraphResult, TemporalGraph};

/// A vehicle moving from `from_zone` to the next zone of its path.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Movement {
    pub vehicle:   VehicleId,
    pub from_zone: ZoneId,
    pub to_zone:   ZoneId,
    /// TCG node of the vehicle at `from_zone`.
    pub from_node: NodeId,
    /// TCG node of the vehicle at `to_zone`.
    pub to_node:   NodeId,
}

/// Which coincidence produced an RCG edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RcgRule {
    Sequential,
    StartStart,
    EndEnd,
    StartEnd,
    EndStart,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RcgEdge {
    pub from: MoveId,
    pub to:   MoveId,
    pub rule: RcgRule,
}

/// Directed graph over movements, used only to detect deadlock.
#[derive(Debug)]
pub struct ResourceGraph {
    moves:      Vec<Movement>,
    edges:      Vec<RcgEdge>,
    successors: Adjacency<MoveId>,
}

impl ResourceGraph {
    /// Project a resolved `tcg` onto movements.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnresolvedContention`][crate::GraphError::UnresolvedContention]
    /// if any contested pair still has both directions open.
    pub fn build(tcg: &TemporalGraph) -> GraphResult<Self> {
        tcg.require_resolved()?;

        // ── Movements, one per sequential edge ────────────────────────────
        let moves: Vec<Movement> = tcg
            .edges()
            .iter()
            .filter(|e| e.kind == EdgeKind::Sequential)
            .map(|e| {
                let from = tcg.node(e.from);
                let to = tcg.node(e.to);
                Movement {
                    vehicle:   from.vehicle,
                    from_zone: from.zone,
                    to_zone:   to.zone,
                    from_node: e.from,
                    to_node:   e.to,
                }
            })
            .collect();

        let committed: FxHashSet<(NodeId, NodeId)> =
            tcg.directed_edges().map(|e| (e.from, e.to)).collect();
        let linked = |a: NodeId, b: NodeId| committed.contains(&(a, b));

        // Movements touching each zone, as either endpoint.
        let mut touching: [Vec<MoveId>; ZONE_COUNT] = Default::default();
        for (i, m) in moves.iter().enumerate() {
            touching[m.from_zone.index()].push(MoveId(i as u32));
            touching[m.to_zone.index()].push(MoveId(i as u32));
        }

        let mut edges = Vec::new();

        // ── Rule a: consecutive movements of one vehicle ──────────────────
        // A vehicle's movements are contiguous and in path order.
        for (i, pair) in moves.windows(2).enumerate() {
            if pair[0].vehicle == pair[1].vehicle && pair[0].to_node == pair[1].from_node {
                edges.push(RcgEdge {
                    from: MoveId(i as u32),
                    to:   MoveId(i as u32 + 1),
                    rule: RcgRule::Sequential,
                });
            }
        }

        // ── Rules b–e: movements of different vehicles ────────────────────
        // `visited[j] == i` marks movement j as already paired with i.
        let mut visited = vec![MoveId::INVALID; moves.len()];
        for (i, a) in moves.iter().enumerate() {
            let a_id = MoveId(i as u32);
            for zone in [a.from_zone, a.to_zone] {
                for &b_id in &touching[zone.index()] {
                    let b = &moves[b_id.index()];
                    if b.vehicle == a.vehicle || visited[b_id.index()] == a_id {
                        continue;
                    }
                    visited[b_id.index()] = a_id;

                    let rules = [
                        (RcgRule::StartStart, a.from_node, b.from_node),
                        (RcgRule::EndEnd,     a.to_node,   b.to_node),
                        (RcgRule::StartEnd,   a.from_node, b.to_node),
                        (RcgRule::EndStart,   a.to_node,   b.from_node),
                    ];
                    for (rule, x, y) in rules {
                        if linked(x, y) {
                            edges.push(RcgEdge { from: a_id, to: b_id, rule });
                        }
                    }
                }
            }
        }

        let pairs: Vec<(usize, MoveId)> = edges.iter().map(|e| (e.from.index(), e.to)).collect();
        let successors = Adjacency::from_pairs(moves.len(), &pairs);

        debug!(movements = moves.len(), edges = edges.len(), "resource graph built");

        Ok(Self { moves, edges, successors })
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn movement(&self, id: MoveId) -> &Movement {
        &self.moves[id.index()]
    }

    pub fn movements(&self) -> &[Movement] {
        &self.moves
    }

    pub fn edges(&self) -> &[RcgEdge] {
        &self.edges
    }

    pub(crate) fn adjacency(&self) -> &Adjacency<MoveId> {
        &self.successors
    }
}
