//! Unweighted graph backed by per-vertex adjacency sets.

use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use log::debug;

use crate::types::{DsError, DsResult};

use super::{Direction, Graph, Vertex};

/// Graph storing, for every vertex, the set of vertices it connects to.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, D> {
    /// Adjacency index: vertex -> neighbors.
    adjacency: BTreeMap<V, BTreeSet<V>>,
    /// Sum of all adjacency set sizes.
    size: usize,
    direction: PhantomData<D>,
}

impl<V: Vertex, D: Direction> AdjacencyGraph<V, D> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            size: 0,
            direction: PhantomData,
        }
    }

    /// Create a graph by applying `add_connection` to every pair in order.
    pub fn from_connections<I: IntoIterator<Item = (V, V)>>(connections: I) -> Self {
        let mut graph = Self::new();
        graph.extend(connections);
        graph
    }

    /// Store `a -> b`. Returns false if it was already present.
    fn link(&mut self, a: V, b: V) -> bool {
        self.adjacency.entry(b.clone()).or_default();
        let added = self.adjacency.entry(a).or_default().insert(b);
        if added {
            self.size += 1;
        }
        added
    }

    /// Drop `a -> b`. Returns false if it was not present.
    fn unlink(&mut self, a: &V, b: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(a)
            .is_some_and(|neighbors| neighbors.remove(b));
        if removed {
            self.size -= 1;
        }
        removed
    }
}

impl<V: Vertex, D: Direction> Graph<V> for AdjacencyGraph<V, D> {
    fn add_connection(&mut self, a: V, b: V) {
        if D::SYMMETRIC {
            self.link(b.clone(), a.clone());
        }
        self.link(a, b);
    }

    fn remove_connection(&mut self, a: &V, b: &V) -> DsResult<()> {
        if !self.unlink(a, b) {
            debug!("{} remove: no edge {:?} -> {:?}", D::name(), a, b);
            return Err(DsError::edge_not_found(a, b));
        }
        if D::SYMMETRIC {
            self.unlink(b, a);
        }
        Ok(())
    }

    fn has_connection(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.adjacency.keys()
    }

    fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.adjacency.get(v).into_iter().flatten()
    }

    fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, BTreeSet::len)
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<V: Vertex, D: Direction> Default for AdjacencyGraph<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, D: Direction> Extend<(V, V)> for AdjacencyGraph<V, D> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.add_connection(a, b);
        }
    }
}

impl<V: Vertex, D: Direction> FromIterator<(V, V)> for AdjacencyGraph<V, D> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::from_connections(iter)
    }
}
