//! Frontier-bounded relaxation.
//!
//! Works in steps. Each step runs up to `K` Bellman-Ford style relaxation
//! rounds over the frontier and every vertex reached so far, then finalizes
//! the vertices whose distance can no longer improve. The frontier becomes
//! the finalized vertices that still have an edge into unfinalized
//! territory. The search ends when the frontier is empty or a step
//! finalizes nothing.
//!
//! A vertex is finalized when its distance is at most the smallest distance
//! among the vertices that changed during the step's last round. With
//! non-negative weights every later improvement starts from one of those
//! changed vertices, so no finalized distance can drop afterwards. `K` trades
//! fewer steps against more rounds per step; it does not affect the result.
//!
//! # Complexity
//!
//! At most V steps of `K` rounds, each round O(V + E).

use std::collections::BTreeSet;

use log::trace;
use serde::{Deserialize, Serialize};

use super::{PathAlgorithm, SearchTree, ShortestPath};
use crate::models::{Graph, VertexId};

/// Policy for the number of relaxation rounds per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierRounds {
    /// A fixed round count (at least one round is always run).
    Fixed(usize),
    /// `max(2, ⌈log₂ V⌉)` for a graph with `V` vertices.
    #[default]
    Log2Vertices,
}

impl FrontierRounds {
    /// Round count for a graph with `vertex_count` vertices.
    pub fn resolve(self, vertex_count: usize) -> usize {
        match self {
            FrontierRounds::Fixed(k) => k.max(1),
            FrontierRounds::Log2Vertices => {
                let ceil_log2 = usize::BITS - vertex_count.saturating_sub(1).leading_zeros();
                (ceil_log2 as usize).max(2)
            }
        }
    }
}

/// Frontier-bounded shortest-path search.
///
/// # Examples
///
/// ```
/// use u_postman::models::Graph;
/// use u_postman::shortest_path::{FrontierRelaxation, FrontierRounds, ShortestPath};
///
/// let g = Graph::from_edges(true, [("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]).unwrap();
/// let engine = FrontierRelaxation::new(FrontierRounds::Fixed(1));
/// let path = engine.shortest_path(&g, &"A".into(), &"C".into()).unwrap();
/// assert_eq!(path.cost(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontierRelaxation {
    rounds: FrontierRounds,
}

impl FrontierRelaxation {
    pub fn new(rounds: FrontierRounds) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> FrontierRounds {
        self.rounds
    }
}

impl ShortestPath for FrontierRelaxation {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::FrontierRelaxation
    }

    fn search(&self, graph: &Graph, source: &VertexId, _target: Option<&VertexId>) -> SearchTree {
        let k = self.rounds.resolve(graph.vertex_count());
        let mut tree = SearchTree::new(source.clone());
        let mut finalized: BTreeSet<VertexId> = BTreeSet::new();
        let mut frontier: BTreeSet<VertexId> = BTreeSet::from([source.clone()]);
        let mut steps = 0usize;

        while !frontier.is_empty() {
            steps += 1;
            let changed = relax_rounds(graph, &mut tree, &frontier, k);

            let bound = changed
                .iter()
                .map(|v| tree.distance(v))
                .fold(f64::INFINITY, f64::min);
            let newly_finalized: Vec<VertexId> = tree
                .reached()
                .filter(|v| !finalized.contains(*v) && tree.distance(v) <= bound)
                .cloned()
                .collect();
            if newly_finalized.is_empty() {
                break;
            }
            finalized.extend(newly_finalized);

            frontier = finalized
                .iter()
                .filter(|v| graph.neighbors(v).keys().any(|n| !finalized.contains(n)))
                .cloned()
                .collect();
        }

        trace!(
            "frontier-relaxation: source {source}, k = {k}, {steps} steps, {} finalized",
            finalized.len()
        );
        tree
    }
}

/// Runs up to `k` relaxation rounds from the frontier and every reached
/// vertex. Returns the vertices whose distance changed in the last round
/// that was run; an empty set means the distances are at a fixpoint.
fn relax_rounds(
    graph: &Graph,
    tree: &mut SearchTree,
    frontier: &BTreeSet<VertexId>,
    k: usize,
) -> BTreeSet<VertexId> {
    let mut changed = BTreeSet::new();
    for _ in 0..k {
        changed.clear();
        let active: BTreeSet<VertexId> = frontier.iter().chain(tree.reached()).cloned().collect();

        for vertex in &active {
            let base = tree.distance(vertex);
            if !base.is_finite() {
                continue;
            }
            for (next, weight) in graph.neighbors(vertex) {
                let candidate = base + weight;
                if candidate < tree.distance(&next) {
                    tree.relax(next.clone(), candidate, vertex.clone());
                    changed.insert(next);
                }
            }
        }

        if changed.is_empty() {
            break;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortest_path::DijkstraScan;

    fn v(id: &str) -> VertexId {
        VertexId::from(id)
    }

    #[test]
    fn test_rounds_policy() {
        assert_eq!(FrontierRounds::Fixed(4).resolve(1000), 4);
        assert_eq!(FrontierRounds::Fixed(0).resolve(10), 1);
        assert_eq!(FrontierRounds::Log2Vertices.resolve(0), 2);
        assert_eq!(FrontierRounds::Log2Vertices.resolve(1), 2);
        assert_eq!(FrontierRounds::Log2Vertices.resolve(8), 3);
        assert_eq!(FrontierRounds::Log2Vertices.resolve(9), 4);
        assert_eq!(FrontierRounds::Log2Vertices.resolve(1024), 10);
    }

    #[test]
    fn test_default_policy_is_log2() {
        assert_eq!(FrontierRounds::default(), FrontierRounds::Log2Vertices);
        assert_eq!(FrontierRelaxation::default().rounds(), FrontierRounds::Log2Vertices);
    }

    #[test]
    fn test_long_cheap_path_beats_short_expensive_one() {
        // The direct edge is found in round one; the cheap chain needs five hops.
        let g = Graph::from_edges(
            true,
            [
                ("S", "T", 100.0),
                ("S", "a", 1.0),
                ("a", "b", 1.0),
                ("b", "c", 1.0),
                ("c", "d", 1.0),
                ("d", "T", 1.0),
            ],
        )
        .expect("valid");
        for k in [1, 2, 3, 8] {
            let engine = FrontierRelaxation::new(FrontierRounds::Fixed(k));
            let path = engine.shortest_path(&g, &v("S"), &v("T")).expect("reachable");
            assert_eq!(path.cost(), 5.0, "k = {k}");
            assert_eq!(path.len(), 6, "k = {k}");
        }
    }

    #[test]
    fn test_matches_reference_on_grid() {
        let mut edges = Vec::new();
        for r in 0..4 {
            for c in 0..4 {
                let here = format!("{r}{c}");
                if c + 1 < 4 {
                    edges.push((here.clone(), format!("{r}{}", c + 1), ((r * 7 + c * 3) % 5 + 1) as f64));
                }
                if r + 1 < 4 {
                    edges.push((here.clone(), format!("{}{c}", r + 1), ((r * 3 + c * 5) % 4 + 1) as f64));
                }
            }
        }
        let g = Graph::from_edges(false, edges).expect("valid");
        let engine = FrontierRelaxation::new(FrontierRounds::Fixed(2));
        for source in g.vertices() {
            let expected = DijkstraScan.distance_map(&g, source);
            let actual = engine.distance_map(&g, source);
            assert_eq!(expected.len(), actual.len());
            for (vertex, d) in &expected {
                assert!((actual[vertex] - d).abs() < 1e-9, "{source} -> {vertex}");
            }
        }
    }

    #[test]
    fn test_unreachable_stays_absent() {
        let g = Graph::from_edges(true, [("A", "B", 1.0), ("C", "A", 1.0)]).expect("valid");
        let dm = FrontierRelaxation::default().distance_map(&g, &v("A"));
        assert_eq!(dm.len(), 2);
        assert!(!dm.contains_key(&v("C")));
    }

    #[test]
    fn test_single_vertex_source() {
        let mut g = Graph::new(false);
        g.add_vertex("A");
        let dm = FrontierRelaxation::default().distance_map(&g, &v("A"));
        assert_eq!(dm.len(), 1);
        assert_eq!(dm[&v("A")], 0.0);
    }
}
