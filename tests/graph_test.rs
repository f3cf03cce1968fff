//! End-to-end tests of the public graph API
//!
//! Exercises mutation, queries and all three path searches together, the way
//! an interactive editor would drive the engine.

use trailgraph::algo::{best_path_dfs_by, dijkstra_by, path_weight};
use trailgraph::{EdgeWeight, Graph, GraphConfig, GraphError};

/// Payload shaped like an editor's edge: a drawable handle plus a weight
#[derive(Debug, Clone, PartialEq)]
struct Link {
    handle: u32,
    weight: f32,
}

impl EdgeWeight for Link {
    fn weight(&self) -> f64 {
        self.weight as f64
    }
}

fn diamond() -> Graph<&'static str, f64> {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D"] {
        graph.insert_vertex(v);
    }
    graph.insert_edge(&"A", &"B", 1.0).unwrap();
    graph.insert_edge(&"B", &"D", 1.0).unwrap();
    graph.insert_edge(&"A", &"C", 5.0).unwrap();
    graph.insert_edge(&"C", &"D", 1.0).unwrap();
    graph
}

#[test]
fn test_dijkstra_and_dfs_agree_on_diamond() {
    let graph = diamond();

    let shortest = graph.dijkstra_shortest_path(&"A", &"D").unwrap();
    let best = graph.dfs_best_path(&"A", &"D").unwrap();

    assert_eq!(shortest.path, vec!["A", "B", "D"]);
    assert_eq!(best.path, vec!["A", "B", "D"]);
    assert_eq!(shortest.cost, 2.0);
    assert_eq!(best.cost, 2.0);
    assert_eq!(graph.path_weight(&shortest.path), Some(2.0));
}

#[test]
fn test_disconnected_vertices_have_no_path() {
    let mut graph: Graph<&str, f64> = Graph::new();
    graph.insert_vertex("X");
    graph.insert_vertex("Y");

    assert!(graph.dijkstra_shortest_path(&"X", &"Y").unwrap().is_empty());
    assert!(graph.dfs_best_path(&"X", &"Y").unwrap().is_empty());
    assert!(graph.bfs_path(&"X", &"Y").unwrap().is_empty());
}

#[test]
fn test_missing_start_is_an_error_not_an_empty_path() {
    let graph = diamond();
    assert_eq!(
        graph.dijkstra_shortest_path(&"Q", &"D"),
        Err(GraphError::VertexNotFound("Q"))
    );
    assert_eq!(
        graph.dfs_best_path(&"A", &"Q"),
        Err(GraphError::VertexNotFound("Q"))
    );
}

#[test]
fn test_editor_session_with_struct_payloads() {
    let mut graph: Graph<u32, Link> = Graph::with_config(GraphConfig::default());
    for v in 0..5 {
        graph.insert_vertex(v);
    }
    graph.insert_edge(&0, &1, Link { handle: 10, weight: 4.0 }).unwrap();
    graph.insert_edge(&1, &4, Link { handle: 11, weight: 4.0 }).unwrap();
    graph.insert_edge(&0, &2, Link { handle: 12, weight: 1.0 }).unwrap();
    graph.insert_edge(&2, &3, Link { handle: 13, weight: 1.0 }).unwrap();
    graph.insert_edge(&3, &4, Link { handle: 14, weight: 1.0 }).unwrap();

    let path = graph.dijkstra_shortest_path(&0, &4).unwrap();
    assert_eq!(path.path, vec![0, 2, 3, 4]);

    // The presentation layer looks up each edge along the path to highlight it
    let handles: Vec<u32> = path
        .path
        .windows(2)
        .map(|pair| graph.get_edge(&pair[0], &pair[1]).unwrap().handle)
        .collect();
    assert_eq!(handles, vec![12, 13, 14]);

    // Deleting a vertex on the path reroutes the search
    assert!(graph.remove_vertex(&3));
    assert_eq!(graph.num_edges(), 3);
    let path = graph.dijkstra_shortest_path(&0, &4).unwrap();
    assert_eq!(path.path, vec![0, 1, 4]);
    assert_eq!(path.cost, 8.0);

    let best = graph.dfs_best_path(&0, &4).unwrap();
    assert_eq!(best.path, path.path);
}

#[test]
fn test_remove_and_reinsert_edge_with_new_payload() {
    let mut graph = diamond();

    let err = graph.insert_edge(&"A", &"C", 0.5).unwrap_err();
    assert_eq!(err, GraphError::EdgeAlreadyExists("A", "C"));

    assert_eq!(graph.remove_edge(&"A", &"C"), Some(5.0));
    graph.insert_edge(&"C", &"A", 0.5).unwrap();
    assert_eq!(graph.get_edge(&"A", &"C"), Some(&0.5));

    // A -> C -> D now weighs 1.5
    let shortest = graph.dijkstra_shortest_path(&"A", &"D").unwrap();
    assert_eq!(shortest.path, vec!["A", "C", "D"]);
    assert_eq!(shortest.cost, 1.5);
}

#[test]
fn test_directed_graph_paths_follow_edge_direction() {
    let mut graph: Graph<char, u32> = Graph::directed();
    for v in ['a', 'b', 'c'] {
        graph.insert_vertex(v);
    }
    graph.insert_edge(&'a', &'b', 1).unwrap();
    graph.insert_edge(&'b', &'c', 1).unwrap();
    graph.insert_edge(&'c', &'a', 1).unwrap();

    assert_eq!(graph.dijkstra_shortest_path(&'a', &'c').unwrap().path, vec!['a', 'b', 'c']);
    assert_eq!(graph.dijkstra_shortest_path(&'c', &'b').unwrap().path, vec!['c', 'a', 'b']);
    assert_eq!(graph.in_degree(&'a'), 1);
    assert_eq!(graph.out_degree(&'a'), 1);
}

#[test]
fn test_closure_weights_change_the_answer() {
    let graph = diamond();

    // Invert the weights: heavy edges become cheap
    let inverted = |w: &f64| 10.0 - w;
    let shortest = dijkstra_by(&graph, &"A", &"D", inverted).unwrap();
    let best = best_path_dfs_by(&graph, &"A", &"D", inverted).unwrap();

    assert_eq!(shortest.path, vec!["A", "C", "D"]);
    assert_eq!(best.path, shortest.path);
    assert_eq!(shortest.cost, 14.0);
    assert_eq!(path_weight(&graph, &shortest.path), Some(6.0));
}

#[test]
fn test_repeated_searches_are_identical() {
    let mut graph: Graph<u32, u32> = Graph::new();
    for v in 0..16 {
        graph.insert_vertex(v);
    }
    // 4x4 grid with unit weights: many equal-cost routes
    for r in 0..4 {
        for c in 0..4 {
            let v = r * 4 + c;
            if c < 3 {
                graph.insert_edge(&v, &(v + 1), 1).unwrap();
            }
            if r < 3 {
                graph.insert_edge(&v, &(v + 4), 1).unwrap();
            }
        }
    }

    let first = graph.dijkstra_shortest_path(&0, &15).unwrap();
    let first_dfs = graph.dfs_best_path(&0, &15).unwrap();
    for _ in 0..5 {
        assert_eq!(graph.dijkstra_shortest_path(&0, &15).unwrap(), first);
        assert_eq!(graph.dfs_best_path(&0, &15).unwrap(), first_dfs);
    }
    assert_eq!(first.cost, 6.0);
    assert_eq!(first_dfs.cost, 6.0);
}

#[test]
fn test_path_result_serializes() {
    let graph = diamond();
    let result = graph.dijkstra_shortest_path(&"A", &"D").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["path"], serde_json::json!(["A", "B", "D"]));
    assert_eq!(json["cost"], serde_json::json!(2.0));
}
