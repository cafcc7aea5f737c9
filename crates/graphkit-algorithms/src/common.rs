//! Shared utilities for graph algorithms
//!
//! Provides the read-only view of graph topology the engines run against, and
//! the dense per-vertex mark sets they keep while running.

use bit_vec::BitVec;

/// Node identifier type (u64). Live identities are positive; 0 never names a node.
pub type NodeId = u64;

/// Read-only adjacency view consumed by the traversal and shortest-path engines.
///
/// Engines never mutate the graph. They ask for the vertex set, successor
/// lists and membership, and query the live graph on every step rather than
/// caching a snapshot.
///
/// Iteration uses associated iterator types so implementations can hand out
/// borrowed iterators without boxing.
pub trait Topology {
    /// Iterator over every live node.
    type Vertices<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;

    /// Iterator over the successors of a single node, in insertion order.
    type Successors<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;

    /// Returns an iterator over all live nodes.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the successors of `node`. Empty when `node` is absent.
    fn successors(&self, node: NodeId) -> Self::Successors<'_>;

    /// Returns true when `node` is live.
    fn contains(&self, node: NodeId) -> bool;

    /// Largest live identity, or `None` for an empty graph.
    fn max_node(&self) -> Option<NodeId>;

    /// Number of live nodes.
    fn node_count(&self) -> usize {
        self.vertices().count()
    }
}

/// A set of nodes backed by a bit vector indexed by node identity.
///
/// The vector grows on demand, so marking a node larger than anything seen
/// before is always valid.
#[derive(Debug, Clone, Default)]
pub struct Marks {
    bits: BitVec,
    count: usize,
}

impl Marks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for identities up to and including `max_node`.
    pub fn with_max_node(max_node: Option<NodeId>) -> Self {
        let len = max_node.map_or(0, |n| n as usize + 1);
        Marks {
            bits: BitVec::from_elem(len, false),
            count: 0,
        }
    }

    /// Marks `node`. Returns true only the first time a node is marked.
    pub fn mark(&mut self, node: NodeId) -> bool {
        let idx = node as usize;
        let len = self.bits.len();
        if idx >= len {
            self.bits.grow(idx + 1 - len, false);
        }

        if self.bits[idx] {
            false
        } else {
            self.bits.set(idx, true);
            self.count += 1;
            true
        }
    }

    pub fn is_marked(&self, node: NodeId) -> bool {
        self.bits.get(node as usize).unwrap_or(false)
    }

    /// Number of marked nodes.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Unmarks every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.bits.clear();
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_first_time_only() {
        let mut marks = Marks::new();
        assert!(!marks.is_marked(3));

        assert!(marks.mark(3));
        assert!(!marks.mark(3));
        assert!(marks.is_marked(3));
        assert_eq!(marks.len(), 1);
    }

    #[test]
    fn test_marks_grow_past_capacity() {
        let mut marks = Marks::with_max_node(Some(4));
        assert!(marks.mark(2));
        assert!(marks.mark(100));
        assert!(marks.is_marked(100));
        assert!(!marks.is_marked(99));
        assert_eq!(marks.len(), 2);
    }

    #[test]
    fn test_marks_clear() {
        let mut marks = Marks::new();
        marks.mark(1);
        marks.mark(7);
        marks.clear();

        assert!(marks.is_empty());
        assert!(!marks.is_marked(1));
        assert!(!marks.is_marked(7));
        assert!(marks.mark(7));
    }

    #[test]
    fn test_marks_out_of_range_is_unmarked() {
        let marks = Marks::with_max_node(None);
        assert!(!marks.is_marked(0));
        assert!(!marks.is_marked(u32::MAX as NodeId));
    }
}
