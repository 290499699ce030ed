//! ordgraph — an ordered binary search tree and adjacency graphs.
//!
//! [`OrderedTree`] keeps values in binary-search-tree order with ties going
//! right. The [`graph`] module provides undirected, directed and weighted
//! graphs with breadth-first traversal and shortest-hop path lookup.
//!
//! Neither structure is synchronized; wrap it in a lock to share it.

pub mod cli;
pub mod graph;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    AdjacencyGraph, BfsOutcome, Directed, DirectedGraph, Direction, Graph, Undirected,
    UndirectedGraph, Vertex, Weighted, WeightedDirectedGraph, WeightedGraph,
    WeightedUndirectedGraph,
};
pub use tree::{Node, OrderedTree};
pub use types::{DsError, DsResult, DEFAULT_WEIGHT};
