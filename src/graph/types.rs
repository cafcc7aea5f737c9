//! Core type definitions for the graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex identity: a positive integer. 0 never names a live vertex.
pub type VertexId = graphkit_algorithms::NodeId;

/// Canonical identifier for an edge, derived from its endpoints.
///
/// The identifier is a pure function of the endpoints, not of insertion
/// time. An `EdgeId` kept across the removal of its edge therefore names
/// any later edge between the same endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Cantor pairing of the ordered pair `(from, to)`.
    pub fn directed(from: VertexId, to: VertexId) -> Self {
        EdgeId(triangle(from + to) + to)
    }

    /// Symmetric pairing: `undirected(u, v) == undirected(v, u)`.
    pub fn undirected(u: VertexId, v: VertexId) -> Self {
        EdgeId(triangle(u + v) + u.min(v))
    }
}

/// `n * (n + 1) / 2`
fn triangle(n: u64) -> u64 {
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * ((n + 1) / 2)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");

        let id2: EdgeId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_directed_pairing_is_ordered() {
        assert_eq!(EdgeId::directed(1, 2).as_u64(), 8);
        assert_eq!(EdgeId::directed(2, 1).as_u64(), 7);
        assert_ne!(EdgeId::directed(3, 5), EdgeId::directed(5, 3));
    }

    #[test]
    fn test_undirected_pairing_is_symmetric() {
        assert_eq!(EdgeId::undirected(1, 2), EdgeId::undirected(2, 1));
        assert_eq!(EdgeId::undirected(4, 4), EdgeId::directed(4, 4));
    }

    #[test]
    fn test_pairings_are_injective() {
        let mut directed = HashSet::new();
        let mut undirected = HashSet::new();
        for u in 1..40u64 {
            for v in 1..40u64 {
                assert!(directed.insert(EdgeId::directed(u, v)));
                if u <= v {
                    assert!(undirected.insert(EdgeId::undirected(u, v)));
                }
            }
        }
    }

    #[test]
    fn test_id_ordering() {
        let id1 = EdgeId::new(1);
        let id2 = EdgeId::new(2);
        assert!(id1 < id2);
    }
}
