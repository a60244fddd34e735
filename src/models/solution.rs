//! Solution type.

use serde::Serialize;

use super::{BalancingPath, VertexId};
use crate::shortest_path::PathAlgorithm;

/// A closed route covering every edge of the input graph.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::shortest_path::PathAlgorithm;
/// use u_postman::solver::Solver;
///
/// let mut g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]).unwrap();
/// let sol = Solver::with_algorithm(PathAlgorithm::DijkstraHeap)
///     .solve(&mut g, &"A".into())
///     .unwrap();
/// assert_eq!(sol.algorithm(), PathAlgorithm::DijkstraHeap);
/// assert_eq!(sol.route_ids(), vec!["A", "B", "C", "A"]);
/// assert_eq!(sol.total_cost(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    algorithm: PathAlgorithm,
    route: Vec<VertexId>,
    total_cost: f64,
    balancing: Vec<BalancingPath>,
}

impl Solution {
    pub fn new(
        algorithm: PathAlgorithm,
        route: Vec<VertexId>,
        total_cost: f64,
        balancing: Vec<BalancingPath>,
    ) -> Self {
        Self {
            algorithm,
            route,
            total_cost,
            balancing,
        }
    }

    /// Shortest-path strategy used while balancing.
    pub fn algorithm(&self) -> PathAlgorithm {
        self.algorithm
    }

    /// The expanded closed route; first and last vertex are the origin.
    pub fn route(&self) -> &[VertexId] {
        &self.route
    }

    /// Route as plain string slices.
    pub fn route_ids(&self) -> Vec<&str> {
        self.route.iter().map(VertexId::as_str).collect()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Paths that were added as virtual edges to balance the graph.
    pub fn balancing(&self) -> &[BalancingPath] {
        &self.balancing
    }

    /// Sum of the balancing path costs (the deadheading overhead).
    pub fn balancing_cost(&self) -> f64 {
        self.balancing.iter().map(BalancingPath::cost).sum()
    }

    /// Number of moves along the route.
    pub fn num_steps(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}
