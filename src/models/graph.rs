//! Graph store with degree-balance bookkeeping.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{Edge, EdgeId, PathResult, VertexId};
use crate::error::{Error, Result};

/// A weighted multigraph, directed or undirected.
///
/// Vertices are created on demand by [`add_edge`](Self::add_edge). Each
/// vertex carries an imbalance counter maintained under the convention:
///
/// - directed edge `u → v`: −1 on `u`, +1 on `v`;
/// - undirected edge `u — v`: +1 on both endpoints.
///
/// A directed vertex is balanced when its counter is zero; an undirected
/// vertex is balanced when its counter (its degree) is even.
///
/// Edges are append-only. Vertex iteration is in id order, so every
/// algorithm running on the graph is deterministic.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
///
/// let mut g = Graph::new(true);
/// g.add_real_edge("A", "B", 1.0).unwrap();
/// g.add_real_edge("B", "A", 2.0).unwrap();
/// assert!(g.is_eulerian());
///
/// g.add_real_edge("A", "C", 1.0).unwrap();
/// assert_eq!(g.unbalanced_vertices().len(), 2);
/// assert_eq!(g.edge_weight(&"A".into(), &"B".into()), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    imbalance: BTreeMap<VertexId, i64>,
    edges: Vec<Edge>,
    incidence: BTreeMap<VertexId, Vec<EdgeId>>,
}

impl Graph {
    /// Creates an empty graph. Directedness is fixed for the graph's lifetime.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            imbalance: BTreeMap::new(),
            edges: Vec::new(),
            incidence: BTreeMap::new(),
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    pub fn from_edges<I, S>(directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<VertexId>,
    {
        let mut graph = Self::new(directed);
        for (source, target, weight) in edges {
            graph.add_real_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Registers a vertex without edges. Existing vertices are left untouched.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) {
        let id = id.into();
        self.incidence.entry(id.clone()).or_default();
        self.imbalance.entry(id).or_insert(0);
    }

    /// Inserts an edge, creating missing endpoints and updating imbalances.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let source = edge.source().clone();
        let target = edge.target().clone();

        *self.imbalance.entry(source.clone()).or_insert(0) += if self.directed { -1 } else { 1 };
        *self.imbalance.entry(target.clone()).or_insert(0) += 1;

        self.incidence.entry(source.clone()).or_default().push(id);
        let target_list = self.incidence.entry(target.clone()).or_default();
        if !self.directed && source != target {
            target_list.push(id);
        }

        self.edges.push(edge);
        id
    }

    /// Inserts a real edge after validating its weight.
    pub fn add_real_edge(
        &mut self,
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        weight: f64,
    ) -> Result<EdgeId> {
        let source = source.into();
        let target = target.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: source,
                to: target,
                weight,
            });
        }
        Ok(self.add_edge(Edge::real(source, target, weight)))
    }

    /// Inserts a virtual edge standing in for `path`.
    pub fn add_virtual_edge(&mut self, path: &PathResult) -> Result<EdgeId> {
        let edge = Edge::from_path(path)
            .ok_or_else(|| Error::configuration("cannot build a virtual edge from an empty path"))?;
        Ok(self.add_edge(edge))
    }

    /// All edges in insertion order; an edge's position equals its [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.imbalance.len()
    }

    /// Vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.imbalance.keys()
    }

    pub fn contains_vertex(&self, id: &VertexId) -> bool {
        self.imbalance.contains_key(id)
    }

    /// Imbalance counter of a vertex, `None` if the vertex is unknown.
    pub fn imbalance(&self, id: &VertexId) -> Option<i64> {
        self.imbalance.get(id).copied()
    }

    /// Edges usable when leaving `id`: outgoing edges in a directed graph,
    /// every incident edge in an undirected one. Insertion order.
    pub fn incident_edges(&self, id: &VertexId) -> &[EdgeId] {
        self.incidence.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Virtual edges added during balancing.
    pub fn virtual_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_virtual())
    }

    /// Adjacent vertices reachable in one step, each mapped to the minimum
    /// weight among the edges leading there.
    pub fn neighbors(&self, id: &VertexId) -> BTreeMap<VertexId, f64> {
        let mut neighbors: BTreeMap<VertexId, f64> = BTreeMap::new();
        for &edge_id in self.incident_edges(id) {
            let edge = &self.edges[edge_id.0];
            let Some(next) = self.step_target(edge, id) else {
                continue;
            };
            neighbors
                .entry(next.clone())
                .and_modify(|w| *w = w.min(edge.weight()))
                .or_insert(edge.weight());
        }
        neighbors
    }

    /// Vertices whose counter is unbalanced, in id order.
    pub fn unbalanced_vertices(&self) -> Vec<VertexId> {
        self.imbalance
            .iter()
            .filter(|(_, counter)| !self.is_balanced_counter(**counter))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// `true` iff every vertex is balanced.
    pub fn is_eulerian(&self) -> bool {
        self.imbalance
            .values()
            .all(|&counter| self.is_balanced_counter(counter))
    }

    /// Minimum weight over the edges leading from `from` to `to`,
    /// honouring direction.
    pub fn edge_weight(&self, from: &VertexId, to: &VertexId) -> Option<f64> {
        self.incident_edges(from)
            .iter()
            .map(|&id| &self.edges[id.0])
            .filter(|e| e.connects(from, to, self.directed))
            .map(Edge::weight)
            .reduce(f64::min)
    }

    /// Returns `true` if every edge lies in the weakly connected component
    /// of `origin`.
    pub fn reaches_all_edges_from(&self, origin: &VertexId) -> bool {
        if self.edges.is_empty() {
            return true;
        }
        let mut adjacent: BTreeMap<&VertexId, Vec<&VertexId>> = BTreeMap::new();
        for edge in &self.edges {
            adjacent.entry(edge.source()).or_default().push(edge.target());
            adjacent.entry(edge.target()).or_default().push(edge.source());
        }

        let mut seen: BTreeSet<&VertexId> = BTreeSet::new();
        let mut queue = VecDeque::new();
        seen.insert(origin);
        queue.push_back(origin);
        while let Some(current) = queue.pop_front() {
            for &next in adjacent.get(current).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        self.edges.iter().all(|e| seen.contains(e.source()))
    }

    /// The vertex reached by leaving `from` along `edge`, or `None` if the
    /// edge cannot be taken from `from`.
    pub(crate) fn step_target<'a>(&self, edge: &'a Edge, from: &VertexId) -> Option<&'a VertexId> {
        if self.directed {
            (edge.source() == from).then(|| edge.target())
        } else {
            edge.opposite(from)
        }
    }

    fn is_balanced_counter(&self, counter: i64) -> bool {
        if self.directed {
            counter == 0
        } else {
            counter % 2 == 0
        }
    }
}
