//! Pathfinding algorithms
//!
//! Breadth-first (fewest hops) and Dijkstra (minimum weight) searches from a
//! start vertex to a goal vertex. Both stop as soon as the goal is settled.

use crate::graph::{EdgeWeight, Graph, GraphError, GraphResult, Vertex};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// Result of a pathfinding algorithm
///
/// An unreachable goal yields an empty `path` with infinite `cost`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V> {
    pub source: V,
    pub target: V,
    pub path: Vec<V>,
    pub cost: f64,
}

impl<V> PathResult<V> {
    pub(crate) fn unreachable(source: V, target: V) -> Self {
        PathResult {
            source,
            target,
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// True when no path connects source and target
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Fail with `VertexNotFound` unless both endpoints exist
pub(crate) fn check_endpoints<V: Vertex, E>(
    graph: &Graph<V, E>,
    start: &V,
    goal: &V,
) -> GraphResult<(), V> {
    for v in [start, goal] {
        if !graph.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v.clone()));
        }
    }
    Ok(())
}

/// Walk predecessor links back from `goal`
fn reconstruct<'g, V: Vertex>(goal: &'g V, parent: &HashMap<&'g V, Option<&'g V>>) -> Vec<V> {
    let mut path = Vec::new();
    let mut curr = Some(goal);
    while let Some(v) = curr {
        path.push(v.clone());
        curr = parent.get(v).copied().flatten();
    }
    path.reverse();
    path
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Cost is the number of hops. Neighbors are explored in insertion order.
pub fn bfs<V: Vertex, E>(graph: &Graph<V, E>, start: &V, goal: &V) -> GraphResult<PathResult<V>, V> {
    check_endpoints(graph, start, goal)?;

    let mut queue = VecDeque::new();
    let mut parent: HashMap<&V, Option<&V>> = HashMap::new(); // vertex -> parent

    queue.push_back(start);
    parent.insert(start, None);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let path = reconstruct(current, &parent);
            debug!("BFS {:?} -> {:?}: {} hops", start, goal, path.len() - 1);
            return Ok(PathResult {
                source: start.clone(),
                target: goal.clone(),
                cost: (path.len() - 1) as f64,
                path,
            });
        }

        for (next, _) in graph.outgoing_edges(current) {
            if !parent.contains_key(next) {
                parent.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    debug!("BFS {:?} -> {:?}: unreachable", start, goal);
    Ok(PathResult::unreachable(start.clone(), goal.clone()))
}

/// State for Dijkstra priority queue
struct State<'g, V> {
    cost: f64,
    vertex: &'g V,
}

impl<V: Ord> PartialEq for State<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for State<'_, V> {}

// BinaryHeap is a max-heap, so both keys are reversed: lowest cost first,
// then the smallest vertex among equal costs.
impl<V: Ord> Ord for State<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(self.vertex))
    }
}

impl<V: Ord> PartialOrd for State<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Edge weights come from the payload's [`EdgeWeight`] implementation.
pub fn dijkstra<V: Vertex, E: EdgeWeight>(
    graph: &Graph<V, E>,
    start: &V,
    goal: &V,
) -> GraphResult<PathResult<V>, V> {
    dijkstra_by(graph, start, goal, E::weight)
}

/// Dijkstra's Algorithm with a caller-supplied weight function
///
/// Weights must be non-negative. This is assumed, not checked: a negative
/// weight can produce a non-optimal path.
pub fn dijkstra_by<V, E, F>(
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

    let mut dist: HashMap<&V, f64> = graph.vertices().map(|v| (v, f64::INFINITY)).collect();
    let mut parent: HashMap<&V, Option<&V>> = graph.vertices().map(|v| (v, None)).collect();
    let mut visited = HashSet::new();
    let mut heap = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(State { cost: 0.0, vertex: start });

    while let Some(State { cost, vertex }) = heap.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        if vertex == goal {
            break;
        }

        for (next, payload) in graph.outgoing_edges(vertex) {
            if visited.contains(next) {
                continue;
            }

            let next_cost = cost + weight(payload);
            if next_cost < dist.get(next).copied().unwrap_or(f64::INFINITY) {
                trace!("Relaxed {:?} via {:?} to {}", next, vertex, next_cost);
                dist.insert(next, next_cost);
                parent.insert(next, Some(vertex));
                heap.push(State { cost: next_cost, vertex: next });
            }
        }
    }

    if goal != start && parent.get(goal).copied().flatten().is_none() {
        debug!(
            "Dijkstra {:?} -> {:?}: unreachable after settling {} vertices",
            start,
            goal,
            visited.len()
        );
        return Ok(PathResult::unreachable(start.clone(), goal.clone()));
    }

    let path = reconstruct(goal, &parent);
    let cost = dist.get(goal).copied().unwrap_or(f64::INFINITY);
    debug!(
        "Dijkstra {:?} -> {:?}: {} vertices, cost {}, settled {}",
        start,
        goal,
        path.len(),
        cost,
        visited.len()
    );

    Ok(PathResult {
        source: start.clone(),
        target: goal.clone(),
        path,
        cost,
    })
}

/// Summed weight of a vertex sequence
///
/// `None` if any consecutive pair is not connected. An empty or single-vertex
/// sequence weighs 0.
pub fn path_weight<V: Vertex, E: EdgeWeight>(graph: &Graph<V, E>, path: &[V]) -> Option<f64> {
    path.windows(2)
        .map(|pair| graph.get_edge(&pair[0], &pair[1]).map(|payload| payload.weight()))
        .sum()
}
