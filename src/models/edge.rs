//! Real and virtual edges.

use serde::Serialize;

use super::{PathResult, VertexId};

/// Identity of an edge inside its graph (insertion index).
///
/// Two edges between the same endpoints with the same weight are still
/// distinct edges; equality of edges is decided by this id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in [`Graph::edges`](super::Graph::edges).
    pub fn index(self) -> usize {
        self.0
    }
}

/// What an edge stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EdgeKind {
    /// An edge of the input graph.
    Real {
        /// Non-negative traversal cost.
        weight: f64,
    },
    /// A synthetic edge standing in for a shortest path, added while
    /// balancing the graph.
    Virtual {
        /// The full vertex sequence from source to target, endpoints included.
        hidden_path: Vec<VertexId>,
        /// Cost of walking `hidden_path`.
        cost: f64,
    },
}

/// A weighted edge between two vertices.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, VertexId};
///
/// let e = Edge::real("A", "B", 2.5);
/// assert_eq!(e.source(), &VertexId::from("A"));
/// assert_eq!(e.target(), &VertexId::from("B"));
/// assert_eq!(e.weight(), 2.5);
/// assert!(!e.is_virtual());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    kind: EdgeKind,
}

impl Edge {
    /// Creates a real edge.
    pub fn real(source: impl Into<VertexId>, target: impl Into<VertexId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind: EdgeKind::Real { weight },
        }
    }

    /// Creates a virtual edge covering a computed shortest path.
    ///
    /// Returns `None` for an empty path.
    pub fn from_path(path: &PathResult) -> Option<Self> {
        let source = path.vertices().first()?.clone();
        let target = path.vertices().last()?.clone();
        Some(Self {
            source,
            target,
            kind: EdgeKind::Virtual {
                hidden_path: path.vertices().to_vec(),
                cost: path.cost(),
            },
        })
    }

    pub fn source(&self) -> &VertexId {
        &self.source
    }

    pub fn target(&self) -> &VertexId {
        &self.target
    }

    /// Traversal cost: the weight of a real edge, the path cost of a virtual one.
    pub fn weight(&self) -> f64 {
        match &self.kind {
            EdgeKind::Real { weight } => *weight,
            EdgeKind::Virtual { cost, .. } => *cost,
        }
    }

    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.kind, EdgeKind::Virtual { .. })
    }

    /// Hidden path of a virtual edge, `None` for real edges.
    pub fn hidden_path(&self) -> Option<&[VertexId]> {
        match &self.kind {
            EdgeKind::Real { .. } => None,
            EdgeKind::Virtual { hidden_path, .. } => Some(hidden_path),
        }
    }

    /// Returns `true` if the edge leads from `from` to `to`, also accepting
    /// the reverse orientation when `directed` is false.
    pub fn connects(&self, from: &VertexId, to: &VertexId, directed: bool) -> bool {
        (&self.source == from && &self.target == to)
            || (!directed && &self.source == to && &self.target == from)
    }

    /// The endpoint opposite to `from`, or `None` if `from` is not an endpoint.
    pub fn opposite(&self, from: &VertexId) -> Option<&VertexId> {
        if &self.source == from {
            Some(&self.target)
        } else if &self.target == from {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: &str) -> VertexId {
        VertexId::from(id)
    }

    #[test]
    fn test_virtual_from_path() {
        let path = PathResult::new(vec![v("C"), v("B"), v("A")], 7.0);
        let e = Edge::from_path(&path).expect("non-empty path");
        assert!(e.is_virtual());
        assert_eq!(e.source(), &v("C"));
        assert_eq!(e.target(), &v("A"));
        assert_eq!(e.weight(), 7.0);
        assert_eq!(e.hidden_path(), Some(&[v("C"), v("B"), v("A")][..]));
    }

    #[test]
    fn test_virtual_from_empty_path() {
        let path = PathResult::new(vec![], 0.0);
        assert!(Edge::from_path(&path).is_none());
    }

    #[test]
    fn test_connects_honours_direction() {
        let e = Edge::real("A", "B", 1.0);
        assert!(e.connects(&v("A"), &v("B"), true));
        assert!(!e.connects(&v("B"), &v("A"), true));
        assert!(e.connects(&v("B"), &v("A"), false));
    }

    #[test]
    fn test_opposite() {
        let e = Edge::real("A", "B", 1.0);
        assert_eq!(e.opposite(&v("A")), Some(&v("B")));
        assert_eq!(e.opposite(&v("B")), Some(&v("A")));
        assert_eq!(e.opposite(&v("C")), None);
        let loop_edge = Edge::real("A", "A", 1.0);
        assert_eq!(loop_edge.opposite(&v("A")), Some(&v("A")));
    }

    #[test]
    fn test_real_has_no_hidden_path() {
        assert!(Edge::real("A", "B", 1.0).hidden_path().is_none());
    }
}
