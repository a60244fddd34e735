//! Dijkstra's algorithm with a binary heap.
//!
//! # Complexity
//!
//! O((V + E) log V). Stale heap entries are skipped lazily when popped.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use log::trace;

use super::{PathAlgorithm, SearchTree, ShortestPath};
use crate::models::{Graph, VertexId};

/// Heap entry ordered so that the smallest distance pops first; equal
/// distances pop in id order.
#[derive(Debug, Clone)]
struct Candidate {
    distance: f64,
    vertex: VertexId,
}

impl Eq for Candidate {}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.vertex == other.vertex
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-queue Dijkstra. Stops as soon as the target is popped when one
/// is given.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::shortest_path::{DijkstraHeap, ShortestPath};
///
/// let g = Graph::from_edges(true, [("A", "B", 4.0), ("A", "C", 1.0), ("C", "B", 1.0)]).unwrap();
/// let path = DijkstraHeap.shortest_path(&g, &"A".into(), &"B".into()).unwrap();
/// assert_eq!(path.cost(), 2.0);
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraHeap;

impl ShortestPath for DijkstraHeap {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::DijkstraHeap
    }

    fn search(&self, graph: &Graph, source: &VertexId, target: Option<&VertexId>) -> SearchTree {
        let mut tree = SearchTree::new(source.clone());
        let mut finalized: BTreeSet<VertexId> = BTreeSet::new();
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            distance: 0.0,
            vertex: source.clone(),
        });

        while let Some(Candidate { distance, vertex }) = heap.pop() {
            if !finalized.insert(vertex.clone()) {
                continue;
            }
            if target == Some(&vertex) {
                trace!("dijkstra-heap: reached target {vertex} at {distance}");
                break;
            }

            for (next, weight) in graph.neighbors(&vertex) {
                if finalized.contains(&next) {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < tree.distance(&next) {
                    tree.relax(next.clone(), candidate, vertex.clone());
                    heap.push(Candidate {
                        distance: candidate,
                        vertex: next,
                    });
                }
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn v(id: &str) -> VertexId {
        VertexId::from(id)
    }

    #[test]
    fn test_candidate_pops_smallest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate { distance: 3.0, vertex: v("C") });
        heap.push(Candidate { distance: 1.0, vertex: v("B") });
        heap.push(Candidate { distance: 1.0, vertex: v("A") });
        let order: Vec<String> = std::iter::from_fn(|| heap.pop())
            .map(|c| c.vertex.to_string())
            .collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let g = Graph::from_edges(
            true,
            [("A", "B", 10.0), ("A", "C", 1.0), ("C", "D", 1.0), ("D", "B", 1.0)],
        )
        .expect("valid");
        let path = DijkstraHeap
            .shortest_path(&g, &v("A"), &v("B"))
            .expect("reachable");
        assert_eq!(path.vertices(), &[v("A"), v("C"), v("D"), v("B")]);
        assert_eq!(path.cost(), 3.0);
    }

    #[test]
    fn test_distance_map_omits_unreachable() {
        let g = Graph::from_edges(true, [("A", "B", 2.0), ("C", "A", 1.0)]).expect("valid");
        let dm = DijkstraHeap.distance_map(&g, &v("A"));
        assert_eq!(dm.len(), 2);
        assert_eq!(dm.get(&v("B")), Some(&2.0));
        assert!(!dm.contains_key(&v("C")));
    }

    #[test]
    fn test_unreachable_target() {
        let g = Graph::from_edges(true, [("A", "B", 2.0)]).expect("valid");
        let err = DijkstraHeap.shortest_path(&g, &v("B"), &v("A")).unwrap_err();
        assert_eq!(err, Error::unreachable(&v("B"), &v("A")));
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = Graph::from_edges(false, [("A", "B", 0.0), ("B", "C", 0.0)]).expect("valid");
        let path = DijkstraHeap
            .shortest_path(&g, &v("A"), &v("C"))
            .expect("reachable");
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.len(), 3);
    }
}
