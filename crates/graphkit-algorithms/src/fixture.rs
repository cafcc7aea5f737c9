//! Small adjacency-list topology shared by the unit tests.

use crate::common::{NodeId, Topology};
use std::iter::Copied;
use std::ops::RangeInclusive;
use std::slice::Iter;

/// Nodes `1..=n`, directed successor lists in insertion order.
pub(crate) struct TestGraph {
    adjacency: Vec<Vec<NodeId>>,
}

impl TestGraph {
    pub(crate) fn new(nodes: usize) -> Self {
        TestGraph {
            adjacency: vec![Vec::new(); nodes + 1],
        }
    }

    pub(crate) fn edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.adjacency[from as usize].push(to);
        self
    }

    pub(crate) fn edges(self, edges: &[(NodeId, NodeId)]) -> Self {
        edges.iter().fold(self, |g, &(u, v)| g.edge(u, v))
    }
}

impl Topology for TestGraph {
    type Vertices<'a> = RangeInclusive<NodeId>;
    type Successors<'a> = Copied<Iter<'a, NodeId>>;

    fn vertices(&self) -> Self::Vertices<'_> {
        1..=(self.adjacency.len() as NodeId - 1)
    }

    fn successors(&self, node: NodeId) -> Self::Successors<'_> {
        let list: &[NodeId] = match self.adjacency.get(node as usize) {
            Some(list) if node > 0 => list,
            _ => &[],
        };
        list.iter().copied()
    }

    fn contains(&self, node: NodeId) -> bool {
        node > 0 && (node as usize) < self.adjacency.len()
    }

    fn max_node(&self) -> Option<NodeId> {
        match self.adjacency.len() {
            0 | 1 => None,
            len => Some(len as NodeId - 1),
        }
    }
}
