//! Graph algorithms module
//!
//! The engines live in the `graphkit-algorithms` crate and run against its
//! read-only `Topology` view. This module provides the integration/adapter
//! layer: it exposes [`Graph`] and [`LabeledGraph`] through that view and adds
//! one-call helpers for the common traversals and path queries.

use crate::graph::store::{Neighbors, Vertices};
use crate::graph::{EdgePolicy, Graph, LabeledGraph, VertexId};
use graphkit_algorithms::Topology;

// Re-export algorithms
pub use graphkit_algorithms::{
    DenseStore, DepthFirst, Fifo, Fringe, Heuristic, Lifo, MapStore, Marks, NodeId, PathResult,
    PathStore, ShortestPaths, Traversal, TraversalOutcome, UnitWeight, VisitOrder, Visitor,
    Weighting,
};

impl<P: EdgePolicy> Topology for Graph<P> {
    type Vertices<'a> = Vertices<'a> where Self: 'a;
    type Successors<'a> = Neighbors<'a> where Self: 'a;

    fn vertices(&self) -> Vertices<'_> {
        Graph::vertices(self)
    }

    fn successors(&self, node: NodeId) -> Neighbors<'_> {
        Graph::successors(self, node)
    }

    fn contains(&self, node: NodeId) -> bool {
        Graph::contains(self, node)
    }

    fn max_node(&self) -> Option<NodeId> {
        self.max_vertex()
    }

    fn node_count(&self) -> usize {
        self.vertex_count()
    }
}

impl<P: EdgePolicy, V, E> Topology for LabeledGraph<'_, P, V, E> {
    type Vertices<'a> = Vertices<'a> where Self: 'a;
    type Successors<'a> = Neighbors<'a> where Self: 'a;

    fn vertices(&self) -> Vertices<'_> {
        self.graph().vertices()
    }

    fn successors(&self, node: NodeId) -> Neighbors<'_> {
        self.graph().successors(node)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.graph().contains(node)
    }

    fn max_node(&self) -> Option<NodeId> {
        self.graph().max_vertex()
    }

    fn node_count(&self) -> usize {
        self.graph().vertex_count()
    }
}

/// Vertices reachable from `start` in breadth-first order.
pub fn bfs<G: Topology>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut traversal = Traversal::breadth_first(graph, VisitOrder::default());
    traversal.traverse_from(start);
    traversal.into_visitor().visited
}

/// Depth-first visit and post-visit orders from `start`.
pub fn dfs<G: Topology>(graph: &G, start: VertexId) -> VisitOrder {
    let mut traversal = Traversal::depth_first(graph, VisitOrder::default());
    traversal.traverse_from(start);
    traversal.into_visitor().into_inner()
}

/// Least-weight path from `source` to `target`, or `None` when `target` is
/// unreachable. The search stops once `target` is settled.
pub fn dijkstra<G, W>(graph: &G, source: VertexId, target: VertexId, weighting: W) -> Option<PathResult>
where
    G: Topology,
    W: Weighting,
{
    let mut paths = ShortestPaths::new(graph, source, weighting).with_destination(target);
    paths.set_paths();
    paths.result(target)
}

/// Path with the fewest edges from `source` to `target`.
pub fn shortest_hops<G: Topology>(graph: &G, source: VertexId, target: VertexId) -> Option<PathResult> {
    dijkstra(graph, source, target, UnitWeight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    fn diamond() -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        for _ in 0..5 {
            graph.add_vertex();
        }
        for (u, v) in [(1, 2), (1, 3), (2, 5), (3, 4), (4, 5)] {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn test_graph_topology_view() {
        let mut graph = diamond();
        graph.remove_vertex(5);

        assert_eq!(Topology::max_node(&graph), Some(4));
        assert_eq!(Topology::node_count(&graph), 4);
        assert!(!Topology::contains(&graph, 5));
        assert_eq!(Topology::successors(&graph, 1).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(Topology::vertices(&graph).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs() {
        let graph = diamond();
        assert_eq!(bfs(&graph, 1), vec![1, 2, 3, 5, 4]);
        assert_eq!(bfs(&graph, 4), vec![4, 5]);
    }

    #[test]
    fn test_dfs() {
        let graph = diamond();
        let order = dfs(&graph, 1);
        // The last successor pushed is the first explored.
        assert_eq!(order.visited, vec![1, 3, 4, 5, 2]);
        assert_eq!(order.post_visited, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_dijkstra_weighted() {
        let graph = diamond();
        let weight = |u: NodeId, v: NodeId| if (u, v) == (2, 5) { 10.0 } else { 1.0 };

        let result = dijkstra(&graph, 1, 5, weight).unwrap();
        assert_eq!(result.path, vec![1, 3, 4, 5]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_shortest_hops_unreachable() {
        let graph = diamond();
        assert!(shortest_hops(&graph, 5, 1).is_none());
        assert_eq!(shortest_hops(&graph, 1, 5).unwrap().cost, 2.0);
    }

    #[test]
    fn test_labeled_graph_runs_algorithms() {
        let mut graph = UndirectedGraph::new();
        let mut labeled = LabeledGraph::new(&mut graph);
        let a = labeled.add_vertex("a");
        let b = labeled.add_vertex("b");
        let c = labeled.add_vertex("c");
        labeled.add_edge(a, b, 1.0).unwrap();
        labeled.add_edge(b, c, 2.0).unwrap();

        let labels = &labeled;
        let weight = |u: NodeId, v: NodeId| labels.edge_label(u, v).copied().unwrap_or(f64::INFINITY);
        let result = dijkstra(labels, c, a, weight).unwrap();
        assert_eq!(result.path, vec![c, b, a]);
        assert_eq!(result.cost, 3.0);
    }
}
