//! Directed and undirected edge policies
//!
//! `Graph<P>` is one type for both kinds of graph. The policy is a zero-sized
//! marker fixed at construction that decides how edges are identified and how
//! they update adjacency. Branches on [`EdgePolicy::DIRECTED`] are resolved at
//! compile time.

use super::types::{EdgeId, VertexId};
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Adjacency policy of a graph.
pub trait EdgePolicy: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    /// Directed graphs keep separate child and parent lists; undirected graphs
    /// keep one symmetric list where a self-edge occupies a single slot.
    const DIRECTED: bool;

    /// Canonical identity of the edge between `u` and `v`.
    fn edge_id(u: VertexId, v: VertexId) -> EdgeId;
}

/// Edges run from start to end. In-degree counts parents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

impl EdgePolicy for Directed {
    const DIRECTED: bool = true;

    fn edge_id(u: VertexId, v: VertexId) -> EdgeId {
        EdgeId::directed(u, v)
    }
}

/// Edges have no direction. In-degree equals out-degree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgePolicy for Undirected {
    const DIRECTED: bool = false;

    fn edge_id(u: VertexId, v: VertexId) -> EdgeId {
        EdgeId::undirected(u, v)
    }
}
