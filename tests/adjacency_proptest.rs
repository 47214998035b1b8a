use adjgraph::{AdjacencyGraph, ErrorCategory, GraphKind};
use petgraph::graphmap::GraphMap;
use petgraph::{Directed, Direction, EdgeType, Undirected};
use proptest::prelude::*;
use std::collections::BTreeSet;

const START_SIZE: usize = 6;

#[derive(Debug, Clone)]
enum Operation {
    AddEdge(usize, usize, i32),
    RemoveEdge(usize, usize),
    ChangeWeight(usize, usize, i32),
    AddVertex,
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    // Vertex ids run one past the initial size to exercise bounds checks.
    let vertex = 0..START_SIZE + 1;
    proptest::collection::vec(
        prop_oneof![
            4 => (vertex.clone(), vertex.clone(), -5i32..20)
                .prop_map(|(i, j, w)| Operation::AddEdge(i, j, w)),
            2 => (vertex.clone(), vertex.clone()).prop_map(|(i, j)| Operation::RemoveEdge(i, j)),
            1 => (vertex.clone(), vertex, -5i32..20)
                .prop_map(|(i, j, w)| Operation::ChangeWeight(i, j, w)),
            1 => Just(Operation::AddVertex),
        ],
        1..80,
    )
}

/// Replays `ops` on an `AdjacencyGraph` and a petgraph `GraphMap`, checking
/// that both agree after every step.
fn check_against_model<Ty: EdgeType>(kind: GraphKind, ops: Vec<Operation>) {
    assert_eq!(kind.is_directed(), Ty::is_directed());

    let mut graph = AdjacencyGraph::new(START_SIZE, kind).unwrap();
    let mut model = GraphMap::<usize, i32, Ty>::new();
    for v in 0..START_SIZE {
        model.add_node(v);
    }

    for op in ops {
        let size = graph.size();
        match op {
            Operation::AddEdge(i, j, w) => {
                let weight = if kind.is_weighted() { w } else { 1 };
                let result = if kind.is_weighted() {
                    graph.add_weighted_edge(i, j, weight)
                } else {
                    graph.add_edge(i, j)
                };
                let valid = i < size && j < size && !(kind.is_directed() && weight < 0);
                assert_eq!(result.is_ok(), valid, "add {i}->{j} ({weight}) on {kind}");
                if valid {
                    model.add_edge(i, j, weight);
                } else {
                    assert_eq!(result.unwrap_err().category(), ErrorCategory::InvalidArgument);
                }
            }
            Operation::RemoveEdge(i, j) => match graph.remove_edge(i, j) {
                Ok(removed) => assert_eq!(removed, model.remove_edge(i, j).is_some()),
                Err(err) => {
                    assert!(i >= size || j >= size);
                    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
                }
            },
            Operation::ChangeWeight(i, j, w) => {
                let result = graph.change_weight(i, j, w);
                if kind != GraphKind::WeightedDirected {
                    assert_eq!(
                        result.unwrap_err().category(),
                        ErrorCategory::UnsupportedOperation
                    );
                } else if i < size && j < size && model.contains_edge(i, j) && w >= 0 {
                    assert!(result.is_ok());
                    model.add_edge(i, j, w);
                } else {
                    assert_eq!(result.unwrap_err().category(), ErrorCategory::InvalidArgument);
                }
            }
            Operation::AddVertex => {
                let id = graph.add_vertex();
                assert_eq!(id, size);
                model.add_node(id);
            }
        }

        assert!(graph.validate_invariants());
        assert_eq!(graph.edge_count(), model.edge_count());
        assert_eq!(graph.edges().len(), model.edge_count());

        for v in 0..graph.size() {
            let expected: BTreeSet<_> = model.neighbors(v).collect();
            assert_eq!(graph.neighbours(v), expected, "neighbours of {v}");

            let parentless = !Ty::is_directed()
                || model.neighbors_directed(v, Direction::Incoming).next().is_none();
            assert_eq!(graph.start_nodes().contains(&v), parentless, "start node {v}");
            assert_eq!(graph.has_parents(v), !parentless);
        }

        for (a, b, &w) in model.all_edges() {
            assert_eq!(graph.link(a, b).and_then(|l| l.forward()), Some(w));
            if Ty::is_directed() {
                assert_eq!(graph.link(b, a).and_then(|l| l.back()), Some(w));
            } else {
                assert_eq!(graph.weight(b, a), Ok(w));
            }
        }
    }
}

proptest! {
    #[test]
    fn simple_directed_matches_graphmap(ops in operations()) {
        check_against_model::<Directed>(GraphKind::SimpleDirected, ops);
    }

    #[test]
    fn simple_undirected_matches_graphmap(ops in operations()) {
        check_against_model::<Undirected>(GraphKind::SimpleUndirected, ops);
    }

    #[test]
    fn weighted_directed_matches_graphmap(ops in operations()) {
        check_against_model::<Directed>(GraphKind::WeightedDirected, ops);
    }

    #[test]
    fn weighted_undirected_matches_graphmap(ops in operations()) {
        check_against_model::<Undirected>(GraphKind::WeightedUndirected, ops);
    }

    #[test]
    fn undirected_graphs_never_store_negative_back_links(
        edges in proptest::collection::vec((0..START_SIZE, 0..START_SIZE, 0i32..50), 0..30)
    ) {
        let mut graph = AdjacencyGraph::new(START_SIZE, GraphKind::WeightedUndirected).unwrap();
        for (i, j, w) in edges {
            graph.add_weighted_edge(i, j, w).unwrap();
        }
        let snapshot = graph.adjacency_snapshot();
        prop_assert!(snapshot.values().flat_map(|row| row.values()).all(|&v| v >= 0));
        prop_assert_eq!(graph.start_nodes().len(), START_SIZE);
    }
}
