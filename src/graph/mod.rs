//! Core graph store
//!
//! This module implements the weighted adjacency model:
//! - Vertices of any hashable, ordered identity type
//! - Directed or undirected edges with caller-defined payloads
//! - Edge weights extracted through [`EdgeWeight`]

pub mod store;
pub mod types;
pub mod weight;

// Re-export main types
pub use store::{Graph, GraphError, GraphResult};
pub use types::{GraphConfig, Vertex};
pub use weight::EdgeWeight;
