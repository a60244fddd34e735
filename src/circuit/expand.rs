//! Virtual-edge expansion.

use crate::error::{Error, Result};
use crate::models::{EdgeKind, Graph, VertexId};

use super::Circuit;

/// Rewrites `circuit` as a walk over real edges only.
///
/// Every traversal of a virtual edge is replaced by the edge's hidden path,
/// without repeating the endpoints already on the walk. In an undirected
/// graph a virtual edge crossed from its target to its source contributes
/// its hidden path reversed. A directed virtual edge crossed backwards is
/// an [`Error::InvalidCircuit`].
///
/// # Examples
///
/// ```
/// use u_postman::circuit::{build_circuit, expand};
/// use u_postman::models::{Graph, PathResult};
///
/// let mut g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0)]).unwrap();
/// g.add_virtual_edge(&PathResult::new(vec!["A".into(), "B".into(), "C".into()], 2.0)).unwrap();
/// let circuit = build_circuit(&g, &"A".into()).unwrap();
/// let route = expand(&circuit, &g).unwrap();
/// let ids: Vec<&str> = route.iter().map(|v| v.as_str()).collect();
/// assert_eq!(ids, vec!["A", "B", "C", "B", "A"]);
/// ```
pub fn expand(circuit: &Circuit, graph: &Graph) -> Result<Vec<VertexId>> {
    let Some(first) = circuit.vertices().first() else {
        return Ok(Vec::new());
    };
    let mut route = Vec::with_capacity(circuit.len());
    route.push(first.clone());

    for (from, to, edge_id) in circuit.steps() {
        let edge = graph.edge(edge_id).ok_or_else(|| {
            Error::invalid_circuit(format!("circuit uses unknown edge {}", edge_id.index()))
        })?;

        match edge.kind() {
            EdgeKind::Real { .. } => route.push(to.clone()),
            EdgeKind::Virtual { hidden_path, .. } => {
                if edge.source() == from && edge.target() == to {
                    route.extend(hidden_path.iter().skip(1).cloned());
                } else if !graph.is_directed() && edge.source() == to && edge.target() == from {
                    route.extend(hidden_path.iter().rev().skip(1).cloned());
                } else {
                    return Err(Error::invalid_circuit(format!(
                        "virtual edge {} -> {} traversed from {from} to {to}",
                        edge.source(),
                        edge.target()
                    )));
                }
            }
        }
    }

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::build_circuit;
    use crate::models::PathResult;

    fn v(id: &str) -> VertexId {
        VertexId::from(id)
    }

    fn names(route: &[VertexId]) -> Vec<&str> {
        route.iter().map(VertexId::as_str).collect()
    }

    #[test]
    fn test_real_only_is_identity() {
        let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)])
            .expect("valid");
        let circuit = build_circuit(&g, &v("A")).expect("balanced");
        let route = expand(&circuit, &g).expect("expandable");
        assert_eq!(route, circuit.vertices());
    }

    #[test]
    fn test_directed_virtual_forward() {
        let mut g = Graph::from_edges(
            true,
            [("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("D", "C", 1.0)],
        )
        .expect("valid");
        // Virtual return leg C -> A standing in for the path C, B, A.
        g.add_virtual_edge(&PathResult::new(vec![v("C"), v("B"), v("A")], 2.0))
            .expect("non-empty");
        let circuit = build_circuit(&g, &v("A")).expect("balanced");
        let route = expand(&circuit, &g).expect("forward traversal");
        assert_eq!(names(&route), vec!["A", "B", "C", "D", "C", "B", "A"]);
    }

    #[test]
    fn test_undirected_virtual_reversed() {
        let mut g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0)]).expect("valid");
        g.add_virtual_edge(&PathResult::new(vec![v("A"), v("B"), v("C")], 2.0))
            .expect("non-empty");
        let circuit = build_circuit(&g, &v("A")).expect("balanced");
        assert_eq!(names(circuit.vertices()), vec!["A", "B", "C", "A"]);
        let route = expand(&circuit, &g).expect("reversible");
        assert_eq!(names(&route), vec!["A", "B", "C", "B", "A"]);
    }

    #[test]
    fn test_directed_virtual_backwards_is_error() {
        let mut g = Graph::new(true);
        g.add_real_edge("A", "B", 1.0).expect("valid");
        g.add_virtual_edge(&PathResult::new(vec![v("B"), v("A")], 1.0))
            .expect("non-empty");
        let circuit = build_circuit(&g, &v("A")).expect("balanced");
        // Flip the walk so the virtual edge is taken A -> B.
        let reversed = Circuit {
            vertices: circuit.vertices().iter().rev().cloned().collect(),
            edges: circuit.edges().iter().rev().copied().collect(),
        };
        let err = expand(&reversed, &g).unwrap_err();
        assert!(matches!(err, Error::InvalidCircuit(_)));
    }
}
