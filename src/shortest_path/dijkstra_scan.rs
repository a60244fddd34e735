//! Dijkstra's algorithm with linear minimum selection.
//!
//! # Complexity
//!
//! O(V² + E). No heap; each step scans every vertex for the smallest
//! tentative distance. Suited to dense graphs and used as the reference
//! the other strategies are checked against.

use super::{PathAlgorithm, SearchTree, ShortestPath};
use crate::models::{Graph, VertexId};

/// Array-scan Dijkstra.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Graph, VertexId};
/// use u_postman::shortest_path::{DijkstraScan, ShortestPath};
///
/// let g = Graph::from_edges(false, [("A", "B", 2.0), ("B", "C", 2.0), ("A", "C", 5.0)]).unwrap();
/// let dm = DijkstraScan.distance_map(&g, &"A".into());
/// assert_eq!(dm[&VertexId::from("C")], 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraScan;

impl ShortestPath for DijkstraScan {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::DijkstraScan
    }

    fn search(&self, graph: &Graph, source: &VertexId, _target: Option<&VertexId>) -> SearchTree {
        let mut tree = SearchTree::new(source.clone());
        let vertices: Vec<&VertexId> = graph.vertices().collect();
        let mut finalized = vec![false; vertices.len()];

        loop {
            let mut closest: Option<(usize, f64)> = None;
            for (i, vertex) in vertices.iter().enumerate() {
                if finalized[i] {
                    continue;
                }
                let d = tree.distance(vertex);
                if d.is_finite() && closest.map_or(true, |(_, best)| d < best) {
                    closest = Some((i, d));
                }
            }

            // Everything left is unreachable.
            let Some((index, distance)) = closest else {
                break;
            };
            finalized[index] = true;
            let current = vertices[index];

            for (next, weight) in graph.neighbors(current) {
                let candidate = distance + weight;
                if candidate < tree.distance(&next) {
                    tree.relax(next, candidate, current.clone());
                }
            }
        }

        tree
    }
}
