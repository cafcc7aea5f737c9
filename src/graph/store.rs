//! In-memory graph storage implementation
//!
//! Vertices live in an arena indexed by identity; edges live in a map keyed
//! by their canonical [`EdgeId`]. Each vertex keeps its children (and, when
//! directed, its parents) as insertion-ordered sets, so positional access,
//! membership and removal are all cheap.

use super::config::GraphConfig;
use super::policy::{Directed, EdgePolicy, Undirected};
use super::types::{EdgeId, VertexId};
use indexmap::{map, set, IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge ({0}, {1}) not found")]
    EdgeNotFound(VertexId, VertexId),

    #[error("Invalid edge: source vertex {0} does not exist")]
    InvalidEdgeSource(VertexId),

    #[error("Invalid edge: target vertex {0} does not exist")]
    InvalidEdgeTarget(VertexId),

    #[error("Vertex {0} has no label")]
    VertexLabelNotFound(VertexId),

    #[error("Edge ({0}, {1}) has no label")]
    EdgeLabelNotFound(VertexId, VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

type Adjacency = IndexSet<VertexId, FxBuildHasher>;

/// Adjacency record of a live vertex.
#[derive(Debug, Clone, Default)]
struct Vertex {
    /// Out-neighbors, or all neighbors when undirected
    children: Adjacency,
    /// In-neighbors; unused when undirected
    parents: Adjacency,
}

/// A graph whose vertices are positive integers.
///
/// - slots: vertex arena, `slots[id - 1]`
/// - free_ids: vacated identities, smallest first
/// - edges: EdgeId -> (start, end)
#[derive(Debug, Clone)]
pub struct Graph<P: EdgePolicy> {
    slots: Vec<Option<Vertex>>,
    free_ids: BinaryHeap<Reverse<VertexId>>,
    vertex_count: usize,
    edges: IndexMap<EdgeId, (VertexId, VertexId), FxBuildHasher>,
    policy: PhantomData<P>,
}

/// A graph whose edges run from start to end.
pub type DirectedGraph = Graph<Directed>;

/// A graph whose edges have no direction.
pub type UndirectedGraph = Graph<Undirected>;

impl<P: EdgePolicy> Graph<P> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Graph {
            slots: Vec::with_capacity(vertex_capacity),
            free_ids: BinaryHeap::new(),
            vertex_count: 0,
            edges: IndexMap::with_capacity_and_hasher(edge_capacity, FxBuildHasher),
            policy: PhantomData,
        }
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.vertex_capacity, config.edge_capacity)
    }

    pub fn is_directed(&self) -> bool {
        P::DIRECTED
    }

    /// Canonical identity of the edge `(u, v)` under this graph's policy,
    /// whether or not the edge exists.
    pub fn edge_id(&self, u: VertexId, v: VertexId) -> EdgeId {
        P::edge_id(u, v)
    }

    fn slot(&self, v: VertexId) -> Option<&Vertex> {
        if v == 0 {
            return None;
        }
        self.slots.get((v - 1) as usize)?.as_ref()
    }

    fn slot_mut(&mut self, v: VertexId) -> Option<&mut Vertex> {
        if v == 0 {
            return None;
        }
        self.slots.get_mut((v - 1) as usize)?.as_mut()
    }

    /// Adds a vertex under the smallest unused positive identity.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = match self.free_ids.pop() {
            Some(Reverse(id)) => id,
            None => {
                self.slots.push(None);
                self.slots.len() as VertexId
            }
        };

        self.slots[(id - 1) as usize] = Some(Vertex::default());
        self.vertex_count += 1;
        trace!(vertex = id, "vertex added");
        id
    }

    /// Adds the edge `(u, v)`, or returns the identity of the existing one.
    ///
    /// Both endpoints must be live.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<EdgeId> {
        let id = P::edge_id(u, v);
        if self.edges.contains_key(&id) {
            return Ok(id);
        }

        // Validate vertices exist
        if !self.contains(u) {
            return Err(GraphError::InvalidEdgeSource(u));
        }
        if !self.contains(v) {
            return Err(GraphError::InvalidEdgeTarget(v));
        }

        if P::DIRECTED {
            if let Some(start) = self.slot_mut(u) {
                start.children.insert(v);
            }
            if let Some(end) = self.slot_mut(v) {
                end.parents.insert(u);
            }
        } else {
            if u != v {
                if let Some(start) = self.slot_mut(u) {
                    start.children.insert(v);
                }
            }
            if let Some(end) = self.slot_mut(v) {
                end.children.insert(u);
            }
        }

        self.edges.insert(id, (u, v));
        trace!(start = u, end = v, edge = id.as_u64(), "edge added");
        Ok(id)
    }

    /// Removes `v` and every edge touching it. Returns false if `v` was absent.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.contains(v) {
            return false;
        }

        for (start, end) in self.incident_edges(v) {
            self.remove_edge(start, end);
        }

        self.slots[(v - 1) as usize] = None;
        self.free_ids.push(Reverse(v));
        self.vertex_count -= 1;
        trace!(vertex = v, "vertex removed");
        true
    }

    /// Removes the edge `(u, v)`. Returns false if there was no such edge.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let Some((start, end)) = self.edges.swap_remove(&P::edge_id(u, v)) else {
            return false;
        };

        if let Some(vertex) = self.slot_mut(start) {
            vertex.children.shift_remove(&end);
        }
        if let Some(vertex) = self.slot_mut(end) {
            if P::DIRECTED {
                vertex.parents.shift_remove(&start);
            } else {
                vertex.children.shift_remove(&start);
            }
        }

        trace!(start, end, "edge removed");
        true
    }

    /// Every edge touching `v` as `(start, end)` pairs, outgoing first.
    pub fn incident_edges(&self, v: VertexId) -> Vec<(VertexId, VertexId)> {
        let Some(vertex) = self.slot(v) else {
            return Vec::new();
        };

        let mut incident: Vec<(VertexId, VertexId)> =
            vertex.children.iter().map(|&child| (v, child)).collect();
        if P::DIRECTED {
            // A directed self-edge is already listed among the children.
            incident.extend(
                vertex
                    .parents
                    .iter()
                    .filter(|&&parent| parent != v)
                    .map(|&parent| (parent, v)),
            );
        }
        incident
    }

    /// Returns true when `v` is a live vertex.
    pub fn contains(&self, v: VertexId) -> bool {
        self.slot(v).is_some()
    }

    /// Returns true when the edge `(u, v)` exists.
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.contains(u) && self.contains(v) && self.edges.contains_key(&P::edge_id(u, v))
    }

    /// Endpoints of the edge named `id`, as inserted.
    pub fn endpoints(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges.get(&id).copied()
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Largest live identity, or `None` when the graph is empty.
    pub fn max_vertex(&self) -> Option<VertexId> {
        self.slots
            .iter()
            .rposition(Option::is_some)
            .map(|idx| idx as VertexId + 1)
    }

    /// Number of children of `v`; 0 when absent.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.slot(v).map_or(0, |vertex| vertex.children.len())
    }

    /// Number of parents of `v`; equal to the out-degree when undirected.
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.slot(v).map_or(0, |vertex| Self::parents_of(vertex).len())
    }

    fn parents_of(vertex: &Vertex) -> &Adjacency {
        if P::DIRECTED {
            &vertex.parents
        } else {
            &vertex.children
        }
    }

    /// The `k`-th child of `v` in insertion order.
    pub fn successor(&self, v: VertexId, k: usize) -> Option<VertexId> {
        self.slot(v)?.children.get_index(k).copied()
    }

    /// The `k`-th parent of `v` in insertion order, bounded by the parent list.
    pub fn predecessor(&self, v: VertexId, k: usize) -> Option<VertexId> {
        Self::parents_of(self.slot(v)?).get_index(k).copied()
    }

    /// Children of `v` in insertion order. Empty when `v` is absent.
    pub fn successors(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.slot(v).map(|vertex| vertex.children.iter()),
        }
    }

    /// Parents of `v` in insertion order. Empty when `v` is absent.
    pub fn predecessors(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.slot(v).map(|vertex| Self::parents_of(vertex).iter()),
        }
    }

    /// All live vertices in ascending order.
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices {
            slots: self.slots.iter().enumerate(),
            remaining: self.vertex_count,
        }
    }

    /// All live edges as `(start, end)` pairs.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            inner: self.edges.iter(),
        }
    }

    /// Clear all vertices and edges.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_ids.clear();
        self.vertex_count = 0;
        self.edges.clear();
    }
}

impl<P: EdgePolicy> Default for Graph<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Neighbor iterator returned by [`Graph::successors`] and
/// [`Graph::predecessors`]. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Option<set::Iter<'a, VertexId>>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.inner.as_mut()?.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |it| it.size_hint())
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<VertexId> {
        self.inner.as_mut()?.next_back().copied()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
impl FusedIterator for Neighbors<'_> {}

/// Iterator over live vertex identities, ascending.
#[derive(Debug, Clone)]
pub struct Vertices<'a> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Option<Vertex>>>,
    remaining: usize,
}

impl Iterator for Vertices<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        for (idx, slot) in self.slots.by_ref() {
            if slot.is_some() {
                self.remaining -= 1;
                return Some(idx as VertexId + 1);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Vertices<'_> {}
impl FusedIterator for Vertices<'_> {}

/// Iterator over live edges as `(start, end)` pairs.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    inner: map::Iter<'a, EdgeId, (VertexId, VertexId)>,
}

impl Iterator for Edges<'_> {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<(VertexId, VertexId)> {
        self.inner.next().map(|(_, &pair)| pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Edges<'_> {}
impl FusedIterator for Edges<'_> {}
