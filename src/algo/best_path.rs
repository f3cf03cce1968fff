//! Exhaustive best-path search
//!
//! Depth-first enumeration of every simple path from start to goal, keeping
//! the lightest one. A branch is cut as soon as its running weight reaches the
//! best complete path found so far.
//!
//! This is not a replacement for [`dijkstra`](super::dijkstra): the worst case
//! is exponential in the number of vertices. The search keeps its own frame
//! stack, so long paths cost heap memory rather than call depth. Callers that
//! need bounded latency should cap the graph size before calling it.

use super::pathfinding::{check_endpoints, PathResult};
use crate::graph::{EdgeWeight, Graph, GraphResult, Vertex};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Minimum-weight simple path found by exhaustive pruning DFS
pub fn best_path_dfs<V: Vertex, E: EdgeWeight>(
    graph: &Graph<V, E>,
    start: &V,
    goal: &V,
) -> GraphResult<PathResult<V>, V> {
    best_path_dfs_by(graph, start, goal, E::weight)
}

/// Exhaustive pruning DFS with a caller-supplied weight function
pub fn best_path_dfs_by<V, E, F>(
    graph: &Graph<V, E>,
    start: &V,
    goal: &V,
    weight: F,
) -> GraphResult<PathResult<V>, V>
where
    V: Vertex,
    F: Fn(&E) -> f64,
{
    check_endpoints(graph, start, goal)?;

    let mut search = Search {
        graph,
        goal,
        weight,
        visited: HashSet::new(),
        stack: Vec::new(),
        best: None,
        expanded: 0,
        pruned: 0,
    };
    search.run(start);

    let Search { best, expanded, pruned, .. } = search;
    match best {
        Some((path, cost)) => {
            debug!(
                "Best-path DFS {:?} -> {:?}: {} vertices, cost {}, expanded {}, pruned {}",
                start,
                goal,
                path.len(),
                cost,
                expanded,
                pruned
            );
            Ok(PathResult {
                source: start.clone(),
                target: goal.clone(),
                path: path.into_iter().cloned().collect(),
                cost,
            })
        }
        None => {
            debug!(
                "Best-path DFS {:?} -> {:?}: unreachable, expanded {}",
                start, goal, expanded
            );
            Ok(PathResult::unreachable(start.clone(), goal.clone()))
        }
    }
}

/// A vertex on the active path and the neighbors still to try from it
struct Frame<'g, V, E> {
    vertex: &'g V,
    weight_so_far: f64,
    neighbors: Vec<(&'g V, &'g E)>,
    next: usize,
}

struct Search<'g, V, E, F> {
    graph: &'g Graph<V, E>,
    goal: &'g V,
    weight: F,
    /// Vertices on the active path only
    visited: HashSet<&'g V>,
    stack: Vec<Frame<'g, V, E>>,
    best: Option<(Vec<&'g V>, f64)>,
    expanded: usize,
    pruned: usize,
}

impl<'g, V, E, F> Search<'g, V, E, F>
where
    V: Vertex,
    F: Fn(&E) -> f64,
{
    fn best_cost(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |(_, cost)| *cost)
    }

    fn run(&mut self, start: &'g V) {
        self.enter(start, 0.0);

        while let Some(frame) = self.stack.last_mut() {
            match frame.neighbors.get(frame.next).copied() {
                Some((next, payload)) => {
                    frame.next += 1;
                    let weight_so_far = frame.weight_so_far;
                    if !self.visited.contains(next) {
                        let step = (self.weight)(payload);
                        self.enter(next, weight_so_far + step);
                    }
                }
                None => {
                    // Backtrack
                    if let Some(done) = self.stack.pop() {
                        self.visited.remove(done.vertex);
                    }
                }
            }
        }
    }

    /// Step onto `current`: prune, record a goal hit, or open a new frame
    fn enter(&mut self, current: &'g V, weight_so_far: f64) {
        if weight_so_far >= self.best_cost() {
            self.pruned += 1;
            trace!("Pruned at {:?} with weight {}", current, weight_so_far);
            return;
        }

        self.expanded += 1;

        if current == self.goal {
            trace!("New best path weight {}", weight_so_far);
            let path = self
                .stack
                .iter()
                .map(|frame| frame.vertex)
                .chain(std::iter::once(current))
                .collect();
            self.best = Some((path, weight_so_far));
            return;
        }

        let graph = self.graph;
        let neighbors = graph.outgoing_edges(current).collect();
        self.visited.insert(current);
        self.stack.push(Frame {
            vertex: current,
            weight_so_far,
            neighbors,
            next: 0,
        });
    }
}
