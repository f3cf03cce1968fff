//! Trailgraph
//!
//! A generic, in-memory weighted graph engine with incremental mutation and
//! path search. The engine knows nothing about how a graph is drawn or
//! edited; a presentation layer feeds it mutations and consumes the paths it
//! returns.
//!
//! # Components
//!
//! - [`graph`]: the adjacency store ([`Graph`]), directed or undirected,
//!   generic over the vertex identity and the edge payload.
//! - [`algo`]: Dijkstra, exhaustive pruning DFS and breadth-first search.
//!
//! The engine is synchronous and single-owner. Traversals borrow the graph
//! immutably, so a graph cannot be mutated while a search is running.
//!
//! ## Example Usage
//!
//! ```rust
//! use trailgraph::Graph;
//!
//! let mut graph: Graph<&str, f64> = Graph::new();
//! for v in ["A", "B", "C", "D"] {
//!     graph.insert_vertex(v);
//! }
//! graph.insert_edge(&"A", &"B", 1.0).unwrap();
//! graph.insert_edge(&"B", &"D", 1.0).unwrap();
//! graph.insert_edge(&"A", &"C", 5.0).unwrap();
//! graph.insert_edge(&"C", &"D", 1.0).unwrap();
//!
//! let shortest = graph.dijkstra_shortest_path(&"A", &"D").unwrap();
//! assert_eq!(shortest.path, vec!["A", "B", "D"]);
//! assert_eq!(shortest.cost, 2.0);
//!
//! let best = graph.dfs_best_path(&"A", &"D").unwrap();
//! assert_eq!(best.path, shortest.path);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{best_path_dfs, bfs, dijkstra, PathResult};
pub use graph::{EdgeWeight, Graph, GraphConfig, GraphError, GraphResult, Vertex};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
