//! Temporal conflict graph (TCG).
//!
//! # Nodes
//!
//! One node per (vehicle, zone) visit.  A vehicle's nodes are created
//! together, in path order, so they occupy a contiguous `NodeId` range.
//!
//! # Edges
//!
//! | Kind           | Between                                   | Direction            |
//! |----------------|-------------------------------------------|----------------------|
//! | `Sequential`   | consecutive zones of one vehicle          | fixed, forward       |
//! | `ArrivalOrder` | entry nodes of successive vehicles that   | fixed, stream order  |
//! |                | enter at the same zone                    |                      |
//! | `QueueOrder`   | other shared-zone nodes of two vehicles   | fixed, stream order  |
//! |                | that entered at the same zone             |                      |
//! | `Contention`   | shared-zone nodes of two vehicles that    | open until resolved  |
//! |                | entered at different zones                |                      |
//!
//! Every two nodes at one zone are joined by exactly one of the last three
//! kinds.  Vehicles queued at the same entry zone keep their queue order at
//! every zone they share, so only vehicles from different entry zones are
//! contested.
//!
//! Sequential, arrival-order and queue-order edges live in the fixed edge
//! table.  A contention edge is a [`ContestedPair`]: both candidate
//! directions are kept as data and [`resolve`][crate::resolve] commits to
//! exactly one.  No edge is ever mutated or spliced after construction.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use ix_core::{NodeId, Timing, Vehicle, VehicleId, ZONE_COUNT, ZoneId};

use crate::{Adjacency, GraphError, GraphResult};

// ── Nodes and edges ───────────────────────────────────────────────────────────

/// One (vehicle, zone) visit.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TcgNode {
    pub vehicle: VehicleId,
    pub zone:    ZoneId,
    /// Position of `zone` in the vehicle's path (0 = entry zone).
    pub step:    u8,
    /// `arrival + enter_zone` on a vehicle's entry node, `None` elsewhere.
    /// Downstream times are derived by the scheduler.
    pub ready_time: Option<f64>,
}

impl TcgNode {
    #[inline]
    pub fn is_entry(&self) -> bool {
        self.step == 0
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EdgeKind {
    /// Type 1: the vehicle leaves `from` before it enters `to`.
    Sequential,
    /// Type 2: the earlier-queued vehicle enters the shared entry zone first.
    ArrivalOrder,
    /// Type 3 between vehicles that entered at the same zone: the
    /// earlier-queued vehicle keeps its lead.
    QueueOrder,
    /// Type 3: a resolved contention between two vehicles at one zone.
    Contention,
}

/// A directed edge of the fixed table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TcgEdge {
    pub kind: EdgeKind,
    pub from: NodeId,
    pub to:   NodeId,
}

/// Which candidate direction of a contested pair survives resolution.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    /// `first → second`.
    Forward,
    /// `second → first`.
    Backward,
}

/// Two vehicles' nodes at the same zone whose order is contested.
///
/// `first` was created before `second` (stream order).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ContestedPair {
    pub zone:   ZoneId,
    pub first:  NodeId,
    pub second: NodeId,
    resolution: Option<Orientation>,
}

impl ContestedPair {
    fn open(zone: ZoneId, first: NodeId, second: NodeId) -> Self {
        Self { zone, first, second, resolution: None }
    }

    #[inline]
    pub fn resolution(&self) -> Option<Orientation> {
        self.resolution
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// The surviving `(from, to)` direction, or `None` while both candidates
    /// are still open.
    pub fn directed(&self) -> Option<(NodeId, NodeId)> {
        self.resolution.map(|o| match o {
            Orientation::Forward  => (self.first, self.second),
            Orientation::Backward => (self.second, self.first),
        })
    }

    /// Both candidate directions, forward first.
    pub fn candidates(&self) -> [(NodeId, NodeId); 2] {
        [(self.first, self.second), (self.second, self.first)]
    }

    /// Commit to one direction, replacing any earlier choice.
    #[inline]
    pub(crate) fn commit(&mut self, orientation: Orientation) {
        self.resolution = Some(orientation);
    }
}

// ── TemporalGraph ─────────────────────────────────────────────────────────────

/// The temporal conflict graph of one vehicle stream.
///
/// Do not construct directly; use [`TemporalGraph::build`] or
/// [`TcgBuilder`].
#[derive(Clone, Debug)]
pub struct TemporalGraph {
    nodes:     Vec<TcgNode>,
    edges:     Vec<TcgEdge>,
    contested: Vec<ContestedPair>,
    vehicles:  usize,
    lookup:    FxHashMap<(VehicleId, ZoneId), NodeId>,
}

impl TemporalGraph {
    /// Build the graph for `vehicles`, taken in stream order.
    pub fn build(vehicles: &[Vehicle], timing: &Timing) -> GraphResult<Self> {
        let mut builder = TcgBuilder::new(*timing);
        for vehicle in vehicles {
            builder.add_vehicle(vehicle)?;
        }
        Ok(builder.build())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of fixed (uncontested) edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contested_count(&self) -> usize {
        self.contested.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> &TcgNode {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[TcgNode] {
        &self.nodes
    }

    /// Uncontested edges, in creation order.
    pub fn edges(&self) -> &[TcgEdge] {
        &self.edges
    }

    pub fn contested(&self) -> &[ContestedPair] {
        &self.contested
    }

    pub(crate) fn contested_mut(&mut self) -> &mut [ContestedPair] {
        &mut self.contested
    }

    /// The node where `vehicle` visits `zone`, if it does.
    pub fn find(&self, vehicle: VehicleId, zone: ZoneId) -> Option<NodeId> {
        self.lookup.get(&(vehicle, zone)).copied()
    }

    /// Nodes visiting `zone`, in creation order.
    pub fn zone_nodes(&self, zone: ZoneId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.zone == zone)
            .map(|(i, _)| NodeId(i as u32))
    }

    // ── Resolution state ──────────────────────────────────────────────────

    pub fn is_resolved(&self) -> bool {
        self.contested.iter().all(ContestedPair::is_resolved)
    }

    /// `Err(UnresolvedContention)` naming the first open pair, if any.
    pub fn require_resolved(&self) -> GraphResult<()> {
        match self.contested.iter().find(|p| !p.is_resolved()) {
            None => Ok(()),
            Some(p) => Err(GraphError::UnresolvedContention {
                zone:   p.zone,
                first:  self.node(p.first).vehicle,
                second: self.node(p.second).vehicle,
            }),
        }
    }

    /// Every committed edge: the fixed table, then the resolved contested
    /// pairs.  Open pairs are skipped; call [`require_resolved`] first when
    /// they must not exist.
    ///
    /// [`require_resolved`]: Self::require_resolved
    pub fn directed_edges(&self) -> impl Iterator<Item = TcgEdge> + '_ {
        let fixed = self.edges.iter().copied();
        let resolved = self.contested.iter().filter_map(|p| {
            p.directed().map(|(from, to)| TcgEdge { kind: EdgeKind::Contention, from, to })
        });
        fixed.chain(resolved)
    }

    /// Outgoing `(target, kind)` entries per node over all committed edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnresolvedContention`] if any pair is still open.
    pub fn adjacency(&self) -> GraphResult<Adjacency<(NodeId, EdgeKind)>> {
        self.require_resolved()?;
        let pairs: Vec<(usize, (NodeId, EdgeKind))> = self
            .directed_edges()
            .map(|e| (e.from.index(), (e.to, e.kind)))
            .collect();
        Ok(Adjacency::from_pairs(self.nodes.len(), &pairs))
    }
}

// ── TcgBuilder ────────────────────────────────────────────────────────────────

/// Streams vehicles into a [`TemporalGraph`].
///
/// Vehicles are consumed one at a time in stream order; that order, not id
/// or arrival time, decides arrival-order and queue-order edges.
/// [`build`](Self::build) orders the shared zones once every vehicle is
/// known.
pub struct TcgBuilder {
    timing:  Timing,
    nodes:   Vec<TcgNode>,
    edges:   Vec<TcgEdge>,
    lookup:  FxHashMap<(VehicleId, ZoneId), NodeId>,
    seen:    FxHashSet<VehicleId>,
    /// Entry zone of each node's vehicle, indexed by `NodeId`.
    origin:  Vec<ZoneId>,
    /// Entry node of the latest vehicle that entered at each zone.
    last_entry: [Option<NodeId>; ZONE_COUNT],
}

impl TcgBuilder {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            nodes:      Vec::new(),
            edges:      Vec::new(),
            lookup:     FxHashMap::default(),
            seen:       FxHashSet::default(),
            origin:     Vec::new(),
            last_entry: [None; ZONE_COUNT],
        }
    }

    /// Expand `vehicle`'s path into nodes, chain them with sequential edges,
    /// and queue it behind the previous vehicle entering at the same zone.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVehicle`] if the id was already added.
    pub fn add_vehicle(&mut self, vehicle: &Vehicle) -> GraphResult<()> {
        let id = vehicle.id();
        if !self.seen.insert(id) {
            return Err(GraphError::DuplicateVehicle(id));
        }

        let entry_node = NodeId(self.nodes.len() as u32);
        let entry_ready = self.timing.entry_ready(vehicle.arrival());

        let mut prev: Option<NodeId> = None;
        for (step, &zone) in vehicle.path().iter().enumerate() {
            let node = NodeId(self.nodes.len() as u32);
            self.nodes.push(TcgNode {
                vehicle: id,
                zone,
                step: step as u8,
                ready_time: (step == 0).then_some(entry_ready),
            });
            self.lookup.insert((id, zone), node);
            self.origin.push(vehicle.start());

            if let Some(from) = prev {
                self.edges.push(TcgEdge { kind: EdgeKind::Sequential, from, to: node });
            }
            prev = Some(node);
        }

        let slot = &mut self.last_entry[vehicle.start().index()];
        if let Some(ahead) = slot.replace(entry_node) {
            self.edges.push(TcgEdge {
                kind: EdgeKind::ArrivalOrder,
                from: ahead,
                to:   entry_node,
            });
        }
        Ok(())
    }

    /// Order every two nodes sharing a zone and return the finished graph.
    ///
    /// Nodes of vehicles with the same entry zone get a queue-order edge
    /// unless an arrival-order edge already joins them; all other pairs are
    /// left contested.
    pub fn build(mut self) -> TemporalGraph {
        let mut by_zone: [Vec<NodeId>; ZONE_COUNT] = Default::default();
        for (i, node) in self.nodes.iter().enumerate() {
            by_zone[node.zone.index()].push(NodeId(i as u32));
        }

        let queued: FxHashSet<(NodeId, NodeId)> = self
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::ArrivalOrder)
            .map(|e| (e.from, e.to))
            .collect();

        // Node ids follow stream order, so `first` is the earlier vehicle.
        let mut contested = Vec::new();
        for (zone, nodes) in ZoneId::ALL.iter().zip(&by_zone) {
            for (i, &first) in nodes.iter().enumerate() {
                for &second in &nodes[i + 1..] {
                    if self.origin[first.index()] != self.origin[second.index()] {
                        contested.push(ContestedPair::open(*zone, first, second));
                    } else if !queued.contains(&(first, second)) {
                        self.edges.push(TcgEdge { kind: EdgeKind::QueueOrder, from: first, to: second });
                    }
                }
            }
        }

        debug!(
            vehicles  = self.seen.len(),
            nodes     = self.nodes.len(),
            edges     = self.edges.len(),
            contested = contested.len(),
            "temporal graph built"
        );

        TemporalGraph {
            nodes: self.nodes,
            edges: self.edges,
            contested,
            vehicles: self.seen.len(),
            lookup: self.lookup,
        }
    }
}
