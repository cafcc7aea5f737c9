//! graphkit
//!
//! An in-memory graph toolkit over integer-identified vertices, with a
//! generalized traversal engine and a unified Dijkstra/A* shortest-path engine.
//!
//! # Architecture
//!
//! - [`graph`]: the mutable structure. One [`Graph`] type serves directed and
//!   undirected graphs through a zero-sized [`EdgePolicy`]; vertex identities
//!   are positive integers, reused smallest-first after removal.
//! - [`graph::LabeledGraph`]: attaches a label to each vertex and edge of a
//!   borrowed graph.
//! - [`algo`]: runs the engines of the `graphkit-algorithms` crate over any
//!   graph through its read-only `Topology` view.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphkit::algo::{ShortestPaths, Traversal, VisitOrder};
//! use graphkit::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//! graph.add_edge(a, c).unwrap();
//!
//! // Breadth-first order from `a`
//! let mut bfs = Traversal::breadth_first(&graph, VisitOrder::default());
//! bfs.traverse_from(a);
//! assert_eq!(bfs.visitor().visited, vec![a, b, c]);
//!
//! // Least-weight path where the direct edge is expensive
//! let weight = |u: u64, v: u64| if (u, v) == (a, c) { 5.0 } else { 1.0 };
//! let mut paths = ShortestPaths::new(&graph, a, weight);
//! paths.set_paths();
//! assert_eq!(paths.path_to(c), vec![a, b, c]);
//! assert_eq!(paths.weight(c), 2.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Directed, DirectedGraph, EdgeId, EdgePolicy, Graph, GraphConfig, GraphError, GraphResult,
    LabeledGraph, Undirected, UndirectedGraph, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
