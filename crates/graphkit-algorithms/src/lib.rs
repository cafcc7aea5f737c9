//! Graph algorithms over integer-identified graphs.
//!
//! The engines here depend only on the read-only [`Topology`] view, so any
//! graph representation can drive them.

pub mod common;
pub mod fringe;
pub mod pathfinding;
pub mod traversal;

#[cfg(test)]
mod fixture;

pub use common::{Marks, NodeId, Topology};
pub use fringe::{Fifo, Fringe, Lifo};
pub use pathfinding::{
    DenseStore, Heuristic, MapStore, PathResult, PathStore, ShortestPaths, UnitWeight, Weighting,
};
pub use traversal::{DepthFirst, Traversal, TraversalOutcome, VisitOrder, Visitor};
