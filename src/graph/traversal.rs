//! Graph traversal algorithms (BFS).

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::trace;
use serde::Serialize;

use crate::types::{DsError, DsResult};

use super::{Graph, Vertex};

/// Result of [`Graph::bfs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "vertices", rename_all = "snake_case")]
pub enum BfsOutcome<V> {
    /// No target was given: every reachable vertex in visitation order.
    Visited(Vec<V>),
    /// A shortest path by hop count, from start to target inclusive.
    Path(Vec<V>),
    /// The target is not reachable from the start.
    NotFound,
}

impl<V> BfsOutcome<V> {
    /// The visited vertices or the path, if any.
    pub fn vertices(&self) -> Option<&[V]> {
        match self {
            Self::Visited(v) | Self::Path(v) => Some(v),
            Self::NotFound => None,
        }
    }

    /// True unless the target was unreachable.
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Convert into a result, mapping [`BfsOutcome::NotFound`] to
    /// [`DsError::NotFound`].
    pub fn into_result(self) -> DsResult<Vec<V>> {
        match self {
            Self::Visited(v) | Self::Path(v) => Ok(v),
            Self::NotFound => Err(DsError::NotFound("no path to target".to_string())),
        }
    }
}

/// BFS from `start`, returning every reachable vertex in visitation order.
///
/// `start` comes first. A vertex is marked when first enqueued, so each one
/// is processed at most once. An unknown `start` yields just `[start]`.
pub fn traverse<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    let mut visited: BTreeSet<V> = BTreeSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            queue.push_back(neighbor.clone());
        }
        visited_order.push(current);
    }

    trace!("bfs from {:?} visited {} vertices", start, visited_order.len());
    visited_order
}

/// BFS from `start` until `target` is first seen as a neighbor.
///
/// Returns the path from `start` to `target` with the fewest hops, or
/// `None` if `target` is unreachable. `start == target` yields `[start]`.
pub fn shortest_path<V, G>(graph: &G, start: &V, target: &V) -> Option<Vec<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    if start == target {
        return Some(vec![start.clone()]);
    }

    // Predecessor of every enqueued vertex except `start`.
    let mut parents: BTreeMap<V, V> = BTreeMap::new();
    let mut visited: BTreeSet<V> = BTreeSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if neighbor == target {
                parents.insert(target.clone(), current.clone());
                let path = unwind(&parents, target);
                trace!("bfs path {:?} -> {:?}: {} hops", start, target, path.len() - 1);
                return Some(path);
            }
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            parents.insert(neighbor.clone(), current.clone());
            queue.push_back(neighbor.clone());
        }
    }

    trace!("bfs path {:?} -> {:?}: unreachable", start, target);
    None
}

/// Follow predecessors back from `target` and return the path start-first.
fn unwind<V: Vertex>(parents: &BTreeMap<V, V>, target: &V) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(parent) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}
