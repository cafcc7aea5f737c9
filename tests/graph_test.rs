//! Integration tests for the graph store and label decorator

use graphkit::graph::{DirectedGraph, GraphConfig, GraphError, LabeledGraph, UndirectedGraph};
use graphkit::EdgeId;

fn directed_with(n: usize, edges: &[(u64, u64)]) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for _ in 0..n {
        graph.add_vertex();
    }
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

#[test]
fn test_identity_reuse() {
    let mut graph = DirectedGraph::new();
    let ids: Vec<u64> = (0..4).map(|_| graph.add_vertex()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    assert!(graph.remove_vertex(2));
    assert_eq!(graph.add_vertex(), 2);
    assert_eq!(graph.add_vertex(), 5);

    // Several holes fill smallest-first.
    graph.remove_vertex(4);
    graph.remove_vertex(1);
    assert_eq!(graph.add_vertex(), 1);
    assert_eq!(graph.add_vertex(), 4);
    assert_eq!(graph.vertex_count(), 5);
}

#[test]
fn test_positional_access() {
    let graph = directed_with(4, &[(1, 2), (2, 3), (1, 4), (4, 2)]);

    assert_eq!(graph.successor(1, 0), Some(2));
    assert_eq!(graph.successor(1, 1), Some(4));
    assert_eq!(graph.successor(1, 2), None);
    assert_eq!(graph.predecessors(2).collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(graph.predecessor(2, 1), Some(4));
    assert_eq!(graph.predecessor(2, 2), None);
    assert_eq!(graph.in_degree(2), 2);
    assert_eq!(graph.out_degree(2), 1);
}

#[test]
fn test_undirected_self_edge_and_vertex_removal() {
    let mut graph = UndirectedGraph::new();
    for _ in 0..4 {
        graph.add_vertex();
    }
    for (u, v) in [(1, 1), (1, 2), (1, 3), (1, 4)] {
        graph.add_edge(u, v).unwrap();
    }

    assert_eq!(graph.out_degree(1), 4);
    assert!(graph.remove_edge(1, 1));
    assert_eq!(graph.out_degree(1), 3);

    assert!(graph.remove_vertex(1));
    assert_eq!(graph.out_degree(2), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_edge_returns_same_id() {
    let mut graph = directed_with(2, &[]);
    let first = graph.add_edge(1, 2).unwrap();
    let second = graph.add_edge(1, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.endpoints(first), Some((1, 2)));
}

#[test]
fn test_edge_id_is_a_function_of_endpoints() {
    let mut graph = directed_with(2, &[]);
    let before = graph.add_edge(1, 2).unwrap();
    graph.remove_edge(1, 2);
    assert_eq!(graph.endpoints(before), None);

    let after = graph.add_edge(1, 2).unwrap();
    assert_eq!(before, after);
    assert_eq!(after, EdgeId::directed(1, 2));
}

#[test]
fn test_invalid_edges() {
    let mut graph = directed_with(1, &[]);
    assert_eq!(graph.add_edge(7, 1), Err(GraphError::InvalidEdgeSource(7)));
    assert_eq!(graph.add_edge(1, 7), Err(GraphError::InvalidEdgeTarget(7)));
    assert_eq!(graph.add_edge(0, 1), Err(GraphError::InvalidEdgeSource(0)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_error_messages() {
    assert_eq!(GraphError::VertexNotFound(3).to_string(), "Vertex 3 not found");
    assert_eq!(GraphError::EdgeNotFound(1, 2).to_string(), "Edge (1, 2) not found");
}

#[test]
fn test_absent_queries_never_fail() {
    let graph = directed_with(2, &[(1, 2)]);
    assert!(!graph.contains(0));
    assert!(!graph.contains(9));
    assert!(!graph.contains_edge(2, 1));
    assert_eq!(graph.out_degree(9), 0);
    assert_eq!(graph.in_degree(9), 0);
    assert_eq!(graph.successors(9).count(), 0);
    assert_eq!(graph.successor(9, 0), None);
}

#[test]
fn test_graph_from_config() {
    let config = GraphConfig::new().vertex_capacity(1_000).edge_capacity(5_000);
    let mut graph = UndirectedGraph::with_config(&config);
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    graph.add_edge(a, b).unwrap();
    assert!(graph.contains_edge(b, a));
    assert!(!graph.is_directed());
}

#[test]
fn test_labeled_road_network() {
    let mut graph = UndirectedGraph::new();
    let mut roads = LabeledGraph::new(&mut graph);
    let berkeley = roads.add_vertex("Berkeley");
    let oakland = roads.add_vertex("Oakland");
    let alameda = roads.add_vertex("Alameda");
    roads.add_edge(berkeley, oakland, 5.0).unwrap();
    roads.add_edge(oakland, alameda, 3.5).unwrap();

    assert_eq!(roads.edge_label(oakland, berkeley), Ok(&5.0));
    assert!(roads.remove_vertex(oakland));
    assert_eq!(roads.edge_label(berkeley, oakland), Err(GraphError::EdgeLabelNotFound(berkeley, oakland)));
    assert_eq!(roads.vertex_label(alameda), Ok(&"Alameda"));
    assert_eq!(roads.edge_count(), 0);
    drop(roads);

    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![berkeley, alameda]);
}
