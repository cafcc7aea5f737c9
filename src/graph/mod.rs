//! Integer-identified graph model
//!
//! This module implements the mutable graph structure:
//! - Vertices named by positive integers, with the smallest free id reused first
//! - Directed and undirected edges behind one [`Graph`] type
//! - Canonical edge identifiers derived from the endpoints
//! - Optional vertex and edge labels through [`LabeledGraph`]

pub mod config;
pub mod labeled;
pub mod policy;
pub mod store;
pub mod types;

// Re-export main types
pub use config::GraphConfig;
pub use labeled::LabeledGraph;
pub use policy::{Directed, EdgePolicy, Undirected};
pub use store::{
    DirectedGraph, Edges, Graph, GraphError, GraphResult, Neighbors, UndirectedGraph, Vertices,
};
pub use types::{EdgeId, VertexId};
