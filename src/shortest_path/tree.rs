//! Per-run search state: tentative distances and predecessors.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{PathResult, VertexId};

/// Distance from a source to every reached vertex. Unreachable vertices
/// are absent.
pub type DistanceMap = BTreeMap<VertexId, f64>;

/// Distances and predecessor links produced by one shortest-path search.
///
/// Owned exclusively by the running algorithm; nothing here is shared with
/// the graph.
#[derive(Debug, Clone)]
pub struct SearchTree {
    source: VertexId,
    distances: DistanceMap,
    predecessors: BTreeMap<VertexId, VertexId>,
}

impl SearchTree {
    /// A tree containing only `source` at distance zero.
    pub fn new(source: VertexId) -> Self {
        let mut distances = BTreeMap::new();
        distances.insert(source.clone(), 0.0);
        Self {
            source,
            distances,
            predecessors: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> &VertexId {
        &self.source
    }

    /// Tentative distance of `vertex`, `f64::INFINITY` if not reached.
    pub fn distance(&self, vertex: &VertexId) -> f64 {
        self.distances.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, vertex: &VertexId) -> Option<&VertexId> {
        self.predecessors.get(vertex)
    }

    /// Records a shorter distance for `vertex`, reached through `via`.
    pub fn relax(&mut self, vertex: VertexId, distance: f64, via: VertexId) {
        self.distances.insert(vertex.clone(), distance);
        self.predecessors.insert(vertex, via);
    }

    /// Vertices with a finite distance, in id order.
    pub fn reached(&self) -> impl Iterator<Item = &VertexId> {
        self.distances.keys()
    }

    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    pub fn into_distances(self) -> DistanceMap {
        self.distances
    }

    /// Walks predecessor links back from `target` to the source.
    ///
    /// Fails with [`Error::UnreachableVertex`] if `target` was never reached.
    pub fn path_to(&self, target: &VertexId) -> Result<PathResult> {
        let cost = self.distance(target);
        if !cost.is_finite() {
            return Err(Error::unreachable(&self.source, target));
        }

        let mut vertices = vec![target.clone()];
        let mut current = target;
        while current != &self.source {
            match self.predecessors.get(current) {
                // A predecessor chain can never be longer than the tree.
                Some(prev) if vertices.len() <= self.distances.len() => {
                    vertices.push(prev.clone());
                    current = prev;
                }
                _ => return Err(Error::unreachable(&self.source, target)),
            }
        }
        vertices.reverse();
        Ok(PathResult::new(vertices, cost))
    }
}
