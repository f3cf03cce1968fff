//! Path search algorithms
//!
//! All algorithms take the graph by shared reference and never mutate it.
//!
//! | Algorithm | Guarantee | Cost |
//! |---|---|---|
//! | [`dijkstra`] | minimum total weight, non-negative weights | `O((V + E) log V)` |
//! | [`best_path_dfs`] | minimum total weight over all simple paths | exponential worst case |
//! | [`bfs`] | fewest hops | `O(V + E)` |
//!
//! Each returns a [`PathResult`]; an empty path means the goal is unreachable.
//! A missing start or goal is reported as [`GraphError::VertexNotFound`].
//! When start and goal coincide the result is the single-vertex path with
//! cost 0.
//!
//! [`GraphError::VertexNotFound`]: crate::graph::GraphError::VertexNotFound

pub mod best_path;
pub mod pathfinding;

pub use best_path::{best_path_dfs, best_path_dfs_by};
pub use pathfinding::{bfs, dijkstra, dijkstra_by, path_weight, PathResult};

use crate::graph::{EdgeWeight, Graph, GraphResult, Vertex};

impl<V: Vertex, E: EdgeWeight> Graph<V, E> {
    /// Shortest path by Dijkstra's algorithm. See [`dijkstra`].
    pub fn dijkstra_shortest_path(&self, start: &V, goal: &V) -> GraphResult<PathResult<V>, V> {
        dijkstra(self, start, goal)
    }

    /// Lightest simple path by exhaustive pruning DFS. See [`best_path_dfs`].
    pub fn dfs_best_path(&self, start: &V, goal: &V) -> GraphResult<PathResult<V>, V> {
        best_path_dfs(self, start, goal)
    }

    /// Summed weight of `path`, or `None` if it uses a missing edge
    pub fn path_weight(&self, path: &[V]) -> Option<f64> {
        path_weight(self, path)
    }
}

impl<V: Vertex, E> Graph<V, E> {
    /// Fewest-hops path. See [`bfs`].
    pub fn bfs_path(&self, start: &V, goal: &V) -> GraphResult<PathResult<V>, V> {
        bfs(self, start, goal)
    }
}
