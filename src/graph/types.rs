//! Core type definitions for the graph engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identity of a vertex.
///
/// Any value with equality, hashing and a total order qualifies. The order is
/// only used to break ties between equally distant vertices during Dijkstra
/// and to canonicalise undirected edge keys; `Debug` is needed for logging.
pub trait Vertex: Eq + Hash + Ord + Clone + fmt::Debug {}

impl<T: Eq + Hash + Ord + Clone + fmt::Debug> Vertex for T {}

/// Graph construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directed edges (`u -> v` only). Undirected when false.
    pub directed: bool,
}

impl GraphConfig {
    pub fn directed() -> Self {
        GraphConfig { directed: true }
    }

    pub fn undirected() -> Self {
        GraphConfig { directed: false }
    }
}

/// Key under which an edge payload is stored.
///
/// Directed edges keep their orientation. Undirected edges are canonicalised
/// so that `(u, v)` and `(v, u)` map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey<V> {
    pub(crate) source: V,
    pub(crate) target: V,
}

impl<V: Vertex> EdgeKey<V> {
    pub(crate) fn new(u: &V, v: &V, directed: bool) -> Self {
        if directed || u <= v {
            EdgeKey { source: u.clone(), target: v.clone() }
        } else {
            EdgeKey { source: v.clone(), target: u.clone() }
        }
    }
}
