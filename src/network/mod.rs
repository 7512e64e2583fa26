//! Road network model.
//!
//! Provides the graph store: named locations, directed weighted links, and
//! the mutation primitives used to edit the network at runtime.

mod adjacency;
mod edge;
mod store;

pub use adjacency::AdjacencyMatrix;
pub use edge::Edge;
pub use store::Network;
