//! Adjacency graphs and breadth-first traversal.
//!
//! [`Graph`] is the common surface. [`AdjacencyGraph`] stores plain
//! adjacency sets, [`WeightedGraph`] stores a weight per connection, and
//! both pick symmetric or one-way storage through a [`Direction`] marker.

pub mod adjacency;
pub mod direction;
pub mod traversal;
pub mod weighted;

use std::fmt;

use crate::types::DsResult;

pub use adjacency::AdjacencyGraph;
pub use direction::{Directed, Direction, Undirected};
pub use traversal::{shortest_path, traverse, BfsOutcome};
pub use weighted::WeightedGraph;

/// Unweighted graph with symmetric adjacency.
pub type UndirectedGraph<V> = AdjacencyGraph<V, Undirected>;
/// Unweighted graph with one-way adjacency.
pub type DirectedGraph<V> = AdjacencyGraph<V, Directed>;
/// Weighted graph with symmetric adjacency.
pub type WeightedUndirectedGraph<V, W> = WeightedGraph<V, W, Undirected>;
/// Weighted graph with one-way adjacency.
pub type WeightedDirectedGraph<V, W> = WeightedGraph<V, W, Directed>;

/// Anything usable as a vertex label.
pub trait Vertex: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> Vertex for T {}

/// Connection management and queries shared by every graph variant.
///
/// Vertices appear implicitly the first time they are an endpoint of a
/// connection and are never removed.
pub trait Graph<V: Vertex> {
    /// Connect `a` to `b` (and `b` to `a` if undirected). Idempotent.
    fn add_connection(&mut self, a: V, b: V);

    /// Remove the connection `a -> b` (and `b -> a` if undirected).
    ///
    /// Fails with [`DsError::EdgeNotFound`](crate::DsError::EdgeNotFound)
    /// and leaves the graph untouched if the connection does not exist.
    fn remove_connection(&mut self, a: &V, b: &V) -> DsResult<()>;

    /// True if `b` is in `a`'s adjacency.
    fn has_connection(&self, a: &V, b: &V) -> bool;

    /// True if `v` has ever been an endpoint.
    fn contains_vertex(&self, v: &V) -> bool;

    /// All vertices, in ascending order.
    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Vertices adjacent to `v`, in ascending order. Empty for unknown `v`.
    fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Out-degree of `v`.
    fn degree(&self, v: &V) -> usize;

    /// Number of distinct vertices.
    fn order(&self) -> usize;

    /// Sum of adjacency cardinalities over all vertices.
    ///
    /// Directed graphs store each connection once, so this is the edge
    /// count. Undirected graphs store it from both endpoints, so this is
    /// twice the edge count (a self-loop is stored, and counted, once).
    fn size(&self) -> usize;

    /// Every vertex reachable from `start`, in BFS visitation order.
    fn traverse(&self, start: &V) -> Vec<V> {
        traversal::traverse(self, start)
    }

    /// A shortest path by hop count from `start` to `target`.
    fn shortest_path(&self, start: &V, target: &V) -> Option<Vec<V>> {
        traversal::shortest_path(self, start, target)
    }

    /// Breadth-first search, with or without a target.
    fn bfs(&self, start: &V, target: Option<&V>) -> BfsOutcome<V> {
        match target {
            None => BfsOutcome::Visited(self.traverse(start)),
            Some(target) => match self.shortest_path(start, target) {
                Some(path) => BfsOutcome::Path(path),
                None => BfsOutcome::NotFound,
            },
        }
    }
}

/// A graph whose connections carry a weight.
pub trait Weighted<V: Vertex, W>: Graph<V> {
    /// Connect `a` to `b` with `weight`, overwriting any previous weight.
    fn add_weighted_connection(&mut self, a: V, b: V, weight: W);

    /// Weight of the connection `a -> b`.
    fn weight(&self, a: &V, b: &V) -> Option<&W>;

    /// Neighbors of `v` with the weight of each connection.
    fn weighted_neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = (&'a V, &'a W)>
    where
        V: 'a,
        W: 'a;
}
