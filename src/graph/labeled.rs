//! Labels on vertices and edges
//!
//! [`LabeledGraph`] decorates a borrowed [`Graph`] with one value per vertex
//! and one per edge. Structure stays owned by the graph: reads go straight
//! through `Deref`, and mutations are forwarded so labels can follow them.

use super::policy::EdgePolicy;
use super::store::{Graph, GraphError, GraphResult};
use super::types::{EdgeId, VertexId};
use rustc_hash::FxHashMap;
use std::ops::Deref;
use tracing::trace;

/// A graph whose vertices carry `V` labels and whose edges carry `E` labels.
///
/// The decorator holds the graph by exclusive borrow for its whole lifetime,
/// so every structural change passes through it. Removing a vertex or edge
/// drops its labels at once; a removed element never reports a stale label.
#[derive(Debug)]
pub struct LabeledGraph<'g, P: EdgePolicy, V, E> {
    graph: &'g mut Graph<P>,
    vertex_labels: FxHashMap<VertexId, V>,
    edge_labels: FxHashMap<EdgeId, E>,
}

impl<'g, P: EdgePolicy, V, E> LabeledGraph<'g, P, V, E> {
    /// Wraps `graph`. Vertices and edges already present start unlabeled.
    pub fn new(graph: &'g mut Graph<P>) -> Self {
        LabeledGraph {
            graph,
            vertex_labels: FxHashMap::default(),
            edge_labels: FxHashMap::default(),
        }
    }

    /// The wrapped graph.
    pub fn graph(&self) -> &Graph<P> {
        &*self.graph
    }

    /// Adds a vertex labeled `label`.
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        let id = self.graph.add_vertex();
        self.vertex_labels.insert(id, label);
        id
    }

    /// Adds a vertex with no label.
    pub fn add_unlabeled_vertex(&mut self) -> VertexId {
        self.graph.add_vertex()
    }

    /// Adds the edge `(u, v)` labeled `label`. If the edge already exists its
    /// current label is kept and `label` is dropped.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, label: E) -> GraphResult<EdgeId> {
        let existed = self.graph.contains_edge(u, v);
        let id = self.graph.add_edge(u, v)?;
        if !existed {
            self.edge_labels.insert(id, label);
        }
        Ok(id)
    }

    /// Adds the edge `(u, v)` without a label.
    pub fn add_unlabeled_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<EdgeId> {
        self.graph.add_edge(u, v)
    }

    /// Replaces the label of vertex `v`.
    pub fn set_vertex_label(&mut self, v: VertexId, label: V) -> GraphResult<Option<V>> {
        if !self.graph.contains(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(self.vertex_labels.insert(v, label))
    }

    /// Replaces the label of edge `(u, v)`.
    pub fn set_edge_label(&mut self, u: VertexId, v: VertexId, label: E) -> GraphResult<Option<E>> {
        if !self.graph.contains_edge(u, v) {
            return Err(GraphError::EdgeNotFound(u, v));
        }
        Ok(self.edge_labels.insert(self.graph.edge_id(u, v), label))
    }

    /// Label of vertex `v`.
    pub fn vertex_label(&self, v: VertexId) -> GraphResult<&V> {
        if !self.graph.contains(v) {
            return Err(GraphError::VertexLabelNotFound(v));
        }
        self.vertex_labels
            .get(&v)
            .ok_or(GraphError::VertexLabelNotFound(v))
    }

    /// Label of edge `(u, v)`. For undirected graphs either endpoint order works.
    pub fn edge_label(&self, u: VertexId, v: VertexId) -> GraphResult<&E> {
        if !self.graph.contains_edge(u, v) {
            return Err(GraphError::EdgeLabelNotFound(u, v));
        }
        self.edge_labels
            .get(&self.graph.edge_id(u, v))
            .ok_or(GraphError::EdgeLabelNotFound(u, v))
    }

    /// Removes `v`, its incident edges and all their labels.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        for (start, end) in self.graph.incident_edges(v) {
            self.edge_labels.remove(&self.graph.edge_id(start, end));
        }
        self.vertex_labels.remove(&v);
        let removed = self.graph.remove_vertex(v);
        if removed {
            trace!(vertex = v, labels = self.vertex_labels.len(), "labeled vertex removed");
        }
        removed
    }

    /// Removes edge `(u, v)` and its label.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        self.edge_labels.remove(&self.graph.edge_id(u, v));
        self.graph.remove_edge(u, v)
    }
}

impl<P: EdgePolicy, V, E> Deref for LabeledGraph<'_, P, V, E> {
    type Target = Graph<P>;

    fn deref(&self) -> &Graph<P> {
        &*self.graph
    }
}
