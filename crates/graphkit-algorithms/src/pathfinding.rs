//! Pathfinding algorithms
//!
//! A single relaxation loop serves both Dijkstra's algorithm and A*. The
//! fringe is ordered by `weight(v) + estimated_distance(v)`: with the default
//! zero heuristic this is Dijkstra, with an admissible estimate it is A*.
//!
//! Where weights and predecessors live is up to the caller through
//! [`PathStore`]; [`DenseStore`] is the default.

use super::common::{NodeId, Topology};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::num::NonZeroU64;
use tracing::debug;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

/// Edge weights and the optional distance estimate used by [`ShortestPaths`].
pub trait Weighting {
    /// Weight of edge `(from, to)`. Only called for edges that exist.
    fn edge_weight(&self, from: NodeId, to: NodeId) -> f64;

    /// Estimated remaining distance from `node` to the destination.
    ///
    /// Must never overestimate the true distance; this is not checked.
    /// The default of 0 reduces the search to Dijkstra's algorithm.
    fn estimated_distance(&self, _node: NodeId) -> f64 {
        0.0
    }
}

/// Any `Fn(from, to) -> weight` closure is a weighting with no heuristic.
impl<F> Weighting for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    fn edge_weight(&self, from: NodeId, to: NodeId) -> f64 {
        self(from, to)
    }
}

/// Every edge weighs 1, giving hop-count shortest paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitWeight;

impl Weighting for UnitWeight {
    fn edge_weight(&self, _from: NodeId, _to: NodeId) -> f64 {
        1.0
    }
}

/// Adds a distance estimate to an existing weighting, turning Dijkstra into A*.
#[derive(Debug, Clone)]
pub struct Heuristic<W, H> {
    weighting: W,
    heuristic: H,
}

impl<W, H> Heuristic<W, H>
where
    W: Weighting,
    H: Fn(NodeId) -> f64,
{
    pub fn new(weighting: W, heuristic: H) -> Self {
        Heuristic {
            weighting,
            heuristic,
        }
    }
}

impl<W, H> Weighting for Heuristic<W, H>
where
    W: Weighting,
    H: Fn(NodeId) -> f64,
{
    fn edge_weight(&self, from: NodeId, to: NodeId) -> f64 {
        self.weighting.edge_weight(from, to)
    }

    fn estimated_distance(&self, node: NodeId) -> f64 {
        (self.heuristic)(node)
    }
}

/// Backing store for the per-vertex search state.
///
/// Unknown vertices read as infinite weight and no predecessor.
pub trait PathStore {
    /// Prepares the store for a new solve over identities up to `max_node`.
    fn reset(&mut self, max_node: Option<NodeId>);

    fn weight(&self, node: NodeId) -> f64;

    fn set_weight(&mut self, node: NodeId, weight: f64);

    fn predecessor(&self, node: NodeId) -> Option<NodeId>;

    fn set_predecessor(&mut self, node: NodeId, predecessor: Option<NodeId>);
}

/// Vectors indexed directly by vertex identity. O(1) access, grown on demand.
#[derive(Debug, Clone, Default)]
pub struct DenseStore {
    weights: Vec<f64>,
    predecessors: Vec<Option<NonZeroU64>>,
}

impl DenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self, node: NodeId) -> usize {
        let idx = node as usize;
        if idx >= self.weights.len() {
            self.weights.resize(idx + 1, f64::INFINITY);
            self.predecessors.resize(idx + 1, None);
        }
        idx
    }
}

impl PathStore for DenseStore {
    fn reset(&mut self, max_node: Option<NodeId>) {
        let len = max_node.map_or(0, |n| n as usize + 1);
        self.weights.clear();
        self.weights.resize(len, f64::INFINITY);
        self.predecessors.clear();
        self.predecessors.resize(len, None);
    }

    fn weight(&self, node: NodeId) -> f64 {
        self.weights
            .get(node as usize)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, node: NodeId, weight: f64) {
        let idx = self.ensure(node);
        self.weights[idx] = weight;
    }

    fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors
            .get(node as usize)
            .copied()
            .flatten()
            .map(NonZeroU64::get)
    }

    fn set_predecessor(&mut self, node: NodeId, predecessor: Option<NodeId>) {
        let idx = self.ensure(node);
        self.predecessors[idx] = predecessor.and_then(NonZeroU64::new);
    }
}

/// Hash maps keyed by vertex identity, for sparse identity spaces.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    weights: FxHashMap<NodeId, f64>,
    predecessors: FxHashMap<NodeId, NodeId>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathStore for MapStore {
    fn reset(&mut self, _max_node: Option<NodeId>) {
        self.weights.clear();
        self.predecessors.clear();
    }

    fn weight(&self, node: NodeId) -> f64 {
        self.weights.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, node: NodeId, weight: f64) {
        self.weights.insert(node, weight);
    }

    fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    fn set_predecessor(&mut self, node: NodeId, predecessor: Option<NodeId>) {
        match predecessor {
            Some(p) => self.predecessors.insert(node, p),
            None => self.predecessors.remove(&node),
        };
    }
}

/// Fringe entry. Ordered so that `BinaryHeap` pops the smallest priority,
/// oldest entry first among equals.
#[derive(Copy, Clone, Debug)]
struct State {
    priority: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority fringe with reposition-by-reinsertion.
///
/// Only the newest entry per node is live; older entries are discarded when
/// they surface. A node popped and later improved is queued again.
#[derive(Default)]
struct PathFringe {
    heap: BinaryHeap<State>,
    live: FxHashMap<NodeId, u64>,
    next_seq: u64,
}

impl PathFringe {
    fn with_capacity(capacity: usize) -> Self {
        PathFringe {
            heap: BinaryHeap::with_capacity(capacity),
            live: FxHashMap::default(),
            next_seq: 0,
        }
    }

    fn insert(&mut self, node: NodeId, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(node, seq);
        self.heap.push(State {
            priority,
            seq,
            node,
        });
    }

    fn pop_min(&mut self) -> Option<NodeId> {
        while let Some(State { seq, node, .. }) = self.heap.pop() {
            if self.live.get(&node) == Some(&seq) {
                self.live.remove(&node);
                return Some(node);
            }
        }
        None
    }
}

/// Shortest paths from a source, optionally towards a single destination.
///
/// Call [`set_paths`](Self::set_paths) before reading weights, predecessors
/// or paths.
pub struct ShortestPaths<'g, G: Topology, W: Weighting, S: PathStore = DenseStore> {
    graph: &'g G,
    source: NodeId,
    destination: Option<NodeId>,
    weighting: W,
    store: S,
}

impl<'g, G: Topology, W: Weighting> ShortestPaths<'g, G, W, DenseStore> {
    /// Shortest paths in `graph` from `source`, backed by a [`DenseStore`].
    pub fn new(graph: &'g G, source: NodeId, weighting: W) -> Self {
        ShortestPaths {
            graph,
            source,
            destination: None,
            weighting,
            store: DenseStore::new(),
        }
    }
}

impl<'g, G: Topology, W: Weighting, S: PathStore> ShortestPaths<'g, G, W, S> {
    /// Stops the search as soon as `destination` is finalized. Paths to other
    /// vertices are then not guaranteed to be minimal.
    pub fn with_destination(mut self, destination: NodeId) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Replaces the backing store.
    pub fn with_store<S2: PathStore>(self, store: S2) -> ShortestPaths<'g, G, W, S2> {
        ShortestPaths {
            graph: self.graph,
            source: self.source,
            destination: self.destination,
            weighting: self.weighting,
            store,
        }
    }

    /// Runs the relaxation loop.
    pub fn set_paths(&mut self) {
        let graph = self.graph;
        self.store.reset(graph.max_node());

        let mut fringe = PathFringe::with_capacity(graph.node_count());
        for node in graph.vertices() {
            self.store.set_weight(node, f64::INFINITY);
            self.store.set_predecessor(node, None);
        }
        // An absent source reaches nothing; every weight stays infinite.
        if graph.contains(self.source) {
            self.store.set_weight(self.source, 0.0);
            self.store.set_predecessor(self.source, None);
        }
        for node in graph.vertices() {
            fringe.insert(node, self.priority(node));
        }

        let mut settled = 0usize;
        while let Some(node) = fringe.pop_min() {
            if Some(node) == self.destination {
                debug!(source = self.source, destination = node, settled, "destination reached");
                return;
            }
            settled += 1;

            let base = self.store.weight(node);
            for next in graph.successors(node) {
                let candidate = base + self.weighting.edge_weight(node, next);
                if candidate < self.store.weight(next) {
                    self.store.set_weight(next, candidate);
                    self.store.set_predecessor(next, Some(node));
                    fringe.insert(next, self.priority(next));
                }
            }
        }

        debug!(source = self.source, settled, "shortest paths computed");
    }

    fn priority(&self, node: NodeId) -> f64 {
        self.store.weight(node) + self.weighting.estimated_distance(node)
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.destination
    }

    /// Current weight of `node`; infinite if unreached or absent.
    pub fn weight(&self, node: NodeId) -> f64 {
        self.store.weight(node)
    }

    /// Current predecessor of `node`, if any.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.store.predecessor(node)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn weighting(&self) -> &W {
        &self.weighting
    }

    /// Vertices from the source to `node` along predecessor links.
    ///
    /// Only meaningful after `set_paths`, and only for `node` equal to the
    /// destination when one is set. The walk stops at a missing predecessor,
    /// so an unreached node yields `[node]`.
    pub fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        // A predecessor chain never revisits a node; the bound guards stores
        // that were tampered with.
        let limit = self.graph.node_count();

        while current != self.source && path.len() <= limit {
            match self.store.predecessor(current) {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// Like [`path_to`](Self::path_to), but `None` when `node` was not reached.
    pub fn try_path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if self.store.weight(node).is_finite() {
            Some(self.path_to(node))
        } else {
            None
        }
    }

    /// Path to the configured destination, `None` without a destination or
    /// when it is unreachable.
    pub fn path(&self) -> Option<Vec<NodeId>> {
        self.try_path_to(self.destination?)
    }

    /// Path and total weight to `target`, when reached.
    pub fn result(&self, target: NodeId) -> Option<PathResult> {
        let path = self.try_path_to(target)?;
        Some(PathResult {
            source: self.source,
            target,
            path,
            cost: self.store.weight(target),
        })
    }
}
