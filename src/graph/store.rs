//! In-memory adjacency store
//!
//! Edge payloads live in a single map keyed by [`EdgeKey`]. An undirected edge
//! is stored once under its canonical key, and both `u -> v` and `v -> u`
//! lookups resolve to that same entry. Per-vertex neighbor sets are an index
//! over the edge map and are only touched by `link`/`unlink`.
//!
//! Insertion order is preserved everywhere (vertices, neighbors, edges), so
//! iteration and therefore every traversal is deterministic.

use super::types::{EdgeKey, GraphConfig, Vertex};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    #[error("Vertex {0:?} not found")]
    VertexNotFound(V),

    #[error("Edge {0:?} -> {1:?} already exists")]
    EdgeAlreadyExists(V, V),

    #[error("Edge {0:?} -> {1:?} not found")]
    EdgeNotFound(V, V),
}

pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// Neighbor index of a single vertex
#[derive(Debug, Clone)]
struct Adjacency<V> {
    /// Targets of outgoing edges (all neighbors when undirected)
    outgoing: IndexSet<V>,
    /// Sources of incoming edges (directed graphs only)
    incoming: IndexSet<V>,
}

impl<V> Default for Adjacency<V> {
    fn default() -> Self {
        Adjacency {
            outgoing: IndexSet::new(),
            incoming: IndexSet::new(),
        }
    }
}

/// Weighted graph generic over vertex identity `V` and edge payload `E`
///
/// Directed or undirected mode is fixed at construction.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    config: GraphConfig,

    /// Vertex -> neighbor index
    adjacency: IndexMap<V, Adjacency<V>>,

    /// Edge payloads, one entry per logical edge
    edges: IndexMap<EdgeKey<V>, E>,
}

impl<V: Vertex, E> Graph<V, E> {
    /// Create an empty undirected graph
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            config,
            adjacency: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    fn key(&self, u: &V, v: &V) -> EdgeKey<V> {
        EdgeKey::new(u, v, self.config.directed)
    }

    // ==================== Mutation ====================

    /// Insert a vertex. Returns false (and leaves its adjacency untouched)
    /// if the vertex already exists.
    pub fn insert_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        debug!("Inserted vertex {:?}", v);
        self.adjacency.insert(v, Adjacency::default());
        true
    }

    /// Insert an edge `u -> v` (or `u -- v` when undirected).
    ///
    /// Fails without touching the graph if an endpoint is missing or the pair
    /// is already connected. Remove the old edge first to replace a payload.
    pub fn insert_edge(&mut self, u: &V, v: &V, payload: E) -> GraphResult<(), V> {
        if !self.contains_vertex(u) {
            return Err(GraphError::VertexNotFound(u.clone()));
        }
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v.clone()));
        }

        let key = self.key(u, v);
        if self.edges.contains_key(&key) {
            return Err(GraphError::EdgeAlreadyExists(u.clone(), v.clone()));
        }

        self.edges.insert(key, payload);
        self.link(u, v);
        debug!("Inserted edge {:?} -> {:?}", u, v);
        Ok(())
    }

    /// Remove the edge between `u` and `v`, returning its payload.
    /// Missing edges are not an error.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Option<E> {
        let key = self.key(u, v);
        let payload = self.edges.shift_remove(&key)?;
        self.unlink(u, v);
        debug!("Removed edge {:?} -> {:?}", u, v);
        Some(payload)
    }

    /// Remove a vertex and every edge incident to it.
    /// Returns false if the vertex was not present.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(adjacency) = self.adjacency.shift_remove(v) else {
            return false;
        };

        let mut removed = 0usize;
        for target in &adjacency.outgoing {
            let key = self.key(v, target);
            if self.edges.shift_remove(&key).is_some() {
                removed += 1;
            }
            if let Some(neighbor) = self.adjacency.get_mut(target) {
                if self.config.directed {
                    neighbor.incoming.shift_remove(v);
                } else {
                    neighbor.outgoing.shift_remove(v);
                }
            }
        }
        for source in &adjacency.incoming {
            let key = self.key(source, v);
            if self.edges.shift_remove(&key).is_some() {
                removed += 1;
            }
            if let Some(neighbor) = self.adjacency.get_mut(source) {
                neighbor.outgoing.shift_remove(v);
            }
        }

        debug!("Removed vertex {:?} with {} incident edges", v, removed);
        true
    }

    /// Remove all vertices and edges, keeping the configuration
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edges.clear();
    }

    fn link(&mut self, u: &V, v: &V) {
        if let Some(adj) = self.adjacency.get_mut(u) {
            adj.outgoing.insert(v.clone());
        }
        if let Some(adj) = self.adjacency.get_mut(v) {
            if self.config.directed {
                adj.incoming.insert(u.clone());
            } else {
                adj.outgoing.insert(u.clone());
            }
        }
    }

    fn unlink(&mut self, u: &V, v: &V) {
        if let Some(adj) = self.adjacency.get_mut(u) {
            adj.outgoing.shift_remove(v);
        }
        if let Some(adj) = self.adjacency.get_mut(v) {
            if self.config.directed {
                adj.incoming.shift_remove(u);
            } else {
                adj.outgoing.shift_remove(u);
            }
        }
    }

    // ==================== Queries ====================

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.edges.contains_key(&self.key(u, v))
    }

    /// Payload of the edge `u -> v`, if any
    pub fn get_edge(&self, u: &V, v: &V) -> Option<&E> {
        self.edges.get(&self.key(u, v))
    }

    /// Mutable payload of the edge `u -> v`. For undirected graphs both
    /// directions observe the update, since they share one entry.
    pub fn get_edge_mut(&mut self, u: &V, v: &V) -> Option<&mut E> {
        let key = self.key(u, v);
        self.edges.get_mut(&key)
    }

    /// The far endpoint of the edge `v -> neighbor`
    pub fn opposite<'a>(&'a self, v: &V, neighbor: &V) -> GraphResult<&'a V, V> {
        self.adjacency
            .get(v)
            .and_then(|adj| adj.outgoing.get(neighbor))
            .ok_or_else(|| GraphError::EdgeNotFound(v.clone(), neighbor.clone()))
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges; an undirected edge counts once
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Every edge exactly once as `(source, target, payload)`.
    ///
    /// Undirected edges report their endpoints in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &E)> + '_ {
        self.edges
            .iter()
            .map(|(key, payload)| (&key.source, &key.target, payload))
    }

    /// Lazy `(neighbor, payload)` view of the edges leaving `v`.
    ///
    /// Empty for an unknown vertex. The iterator borrows the graph, so the
    /// graph cannot change while it is alive.
    pub fn outgoing_edges<'a>(&'a self, v: &'a V) -> impl Iterator<Item = (&'a V, &'a E)> + 'a {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|adj| adj.outgoing.iter())
            .filter_map(move |target| self.get_edge(v, target).map(|payload| (target, payload)))
    }

    /// Lazy `(source, payload)` view of the edges entering `v`.
    ///
    /// Identical to [`Graph::outgoing_edges`] for undirected graphs.
    pub fn incoming_edges<'a>(&'a self, v: &'a V) -> impl Iterator<Item = (&'a V, &'a E)> + 'a {
        let directed = self.config.directed;
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(move |adj| if directed { adj.incoming.iter() } else { adj.outgoing.iter() })
            .filter_map(move |source| self.get_edge(source, v).map(|payload| (source, payload)))
    }

    pub fn out_degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, |adj| adj.outgoing.len())
    }

    /// In-degree of `v`. Equals the out-degree for undirected graphs.
    pub fn in_degree(&self, v: &V) -> usize {
        if !self.config.directed {
            return self.out_degree(v);
        }
        self.adjacency.get(v).map_or(0, |adj| adj.incoming.len())
    }
}

impl<V: Vertex, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E: fmt::Debug> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices() {
            write!(f, "Vertex {:?}:", v)?;
            for (neighbor, payload) in self.outgoing_edges(v) {
                write!(f, " ({:?}, {:?})", neighbor, payload)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
