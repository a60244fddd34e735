//! Path value types.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// An ordered vertex sequence together with its total cost.
///
/// Two results are equal when both the sequence and the cost are equal.
///
/// # Examples
///
/// ```
/// use u_postman::models::{PathResult, VertexId};
///
/// let p = PathResult::new(vec![VertexId::from("A"), VertexId::from("B")], 3.0);
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.cost(), 3.0);
/// assert_eq!(p.source(), Some(&VertexId::from("A")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    vertices: Vec<VertexId>,
    cost: f64,
}

impl PathResult {
    pub fn new(vertices: Vec<VertexId>, cost: f64) -> Self {
        Self { vertices, cost }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices on the path (edges + 1).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn source(&self) -> Option<&VertexId> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&VertexId> {
        self.vertices.last()
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }
}

/// A path chosen to cancel the imbalance between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancingPath {
    /// Vertex with surplus in-degree (directed) or an odd vertex (undirected).
    pub from: VertexId,
    /// Vertex with surplus out-degree (directed) or its odd partner.
    pub to: VertexId,
    /// Shortest path from `from` to `to`.
    pub path: PathResult,
}

impl BalancingPath {
    pub fn new(from: VertexId, to: VertexId, path: PathResult) -> Self {
        Self { from, to, path }
    }

    pub fn cost(&self) -> f64 {
        self.path.cost()
    }
}
