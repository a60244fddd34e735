//! Route costing.

use crate::error::{Error, Result};
use crate::models::{Graph, VertexId};

/// Sums edge weights along `route`, a walk over the edges of `graph`.
///
/// Each move consumes the earliest inserted unused edge between its two
/// vertices, so parallel edges are counted once each. Virtual edges are
/// counted at their path cost; pass the walk before virtual-edge expansion.
/// A move with no unused edge left is an [`Error::InvalidCircuit`].
///
/// # Examples
///
/// ```
/// use u_postman::circuit::route_cost;
/// use u_postman::models::{Graph, VertexId};
///
/// let g = Graph::from_edges(false, [("A", "B", 2.0), ("A", "B", 5.0)]).unwrap();
/// let route: Vec<VertexId> = vec!["A".into(), "B".into(), "A".into()];
/// assert_eq!(route_cost(&g, &route).unwrap(), 7.0);
/// ```
pub fn route_cost(graph: &Graph, route: &[VertexId]) -> Result<f64> {
    let mut used = vec![false; graph.edge_count()];
    let mut total = 0.0;

    for pair in route.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let edge_id = graph
            .incident_edges(from)
            .iter()
            .copied()
            .find(|id| {
                !used[id.index()]
                    && graph
                        .edge(*id)
                        .is_some_and(|e| e.connects(from, to, graph.is_directed()))
            })
            .ok_or_else(|| {
                Error::invalid_circuit(format!("no unused edge left for move {from} -> {to}"))
            })?;
        used[edge_id.index()] = true;
        total += graph.edge(edge_id).map_or(0.0, |e| e.weight());
    }

    Ok(total)
}
