//! Weighted graph backed by per-vertex neighbor -> weight maps.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use log::debug;

use crate::types::{DsError, DsResult, DEFAULT_WEIGHT};

use super::{Direction, Graph, Vertex, Weighted};

/// Graph storing, for every vertex, the weight of each outgoing connection.
///
/// `add_connection` without a weight uses `W::from(1)`. Re-adding an
/// existing connection overwrites its weight and leaves `size` unchanged.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W, D> {
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
    size: usize,
    direction: PhantomData<D>,
}

impl<V: Vertex, W: Clone, D: Direction> WeightedGraph<V, W, D> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            size: 0,
            direction: PhantomData,
        }
    }

    /// Create a graph from `(a, b, weight)` triples, applied in order.
    pub fn from_weighted_connections<I: IntoIterator<Item = (V, V, W)>>(connections: I) -> Self {
        let mut graph = Self::new();
        for (a, b, weight) in connections {
            graph.connect(a, b, weight);
        }
        graph
    }

    /// Store `a -> b` with `weight`, plus `b -> a` if undirected.
    fn connect(&mut self, a: V, b: V, weight: W) {
        if D::SYMMETRIC {
            self.link(b.clone(), a.clone(), weight.clone());
        }
        self.link(a, b, weight);
    }

    fn link(&mut self, a: V, b: V, weight: W) {
        self.adjacency.entry(b.clone()).or_default();
        if self
            .adjacency
            .entry(a)
            .or_default()
            .insert(b, weight)
            .is_none()
        {
            self.size += 1;
        }
    }

    fn unlink(&mut self, a: &V, b: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(a)
            .is_some_and(|neighbors| neighbors.remove(b).is_some());
        if removed {
            self.size -= 1;
        }
        removed
    }
}

impl<V, W, D> WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Clone + From<u8>,
    D: Direction,
{
    /// Create a graph from unweighted pairs, each with the default weight.
    pub fn from_connections<I: IntoIterator<Item = (V, V)>>(connections: I) -> Self {
        let mut graph = Self::new();
        graph.extend(connections);
        graph
    }
}

impl<V, W, D> Graph<V> for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Clone + From<u8>,
    D: Direction,
{
    fn add_connection(&mut self, a: V, b: V) {
        self.add_weighted_connection(a, b, W::from(DEFAULT_WEIGHT));
    }

    fn remove_connection(&mut self, a: &V, b: &V) -> DsResult<()> {
        if !self.unlink(a, b) {
            debug!("weighted {} remove: no edge {:?} -> {:?}", D::name(), a, b);
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
            .is_some_and(|neighbors| neighbors.contains_key(b))
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
        self.adjacency.get(v).into_iter().flat_map(BTreeMap::keys)
    }

    fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, BTreeMap::len)
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<V, W, D> Weighted<V, W> for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Clone + From<u8>,
    D: Direction,
{
    fn add_weighted_connection(&mut self, a: V, b: V, weight: W) {
        self.connect(a, b, weight);
    }

    fn weight(&self, a: &V, b: &V) -> Option<&W> {
        self.adjacency.get(a)?.get(b)
    }

    fn weighted_neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = (&'a V, &'a W)>
    where
        V: 'a,
        W: 'a,
    {
        self.adjacency.get(v).into_iter().flatten()
    }
}

impl<V: Vertex, W: Clone, D: Direction> Default for WeightedGraph<V, W, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, D> Extend<(V, V)> for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Clone + From<u8>,
    D: Direction,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.add_connection(a, b);
        }
    }
}

impl<V, W, D> FromIterator<(V, V)> for WeightedGraph<V, W, D>
where
    V: Vertex,
    W: Clone + From<u8>,
    D: Direction,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::from_connections(iter)
    }
}
