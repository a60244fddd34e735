//! Shortest-path strategies behind one contract.
//!
//! - [`DijkstraHeap`] — binary-heap Dijkstra, O((V + E) log V)
//! - [`DijkstraScan`] — array-scan Dijkstra, O(V² + E)
//! - [`FrontierRelaxation`] — frontier-bounded relaxation in steps of `K` rounds
//!
//! All strategies agree on distances for graphs with non-negative weights.
//! Ties between equal-cost paths are broken by vertex id order, so every
//! run on the same graph returns the same paths.

mod dijkstra_heap;
mod dijkstra_scan;
mod frontier;
mod tree;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Graph, PathResult, VertexId};

pub use dijkstra_heap::DijkstraHeap;
pub use dijkstra_scan::DijkstraScan;
pub use frontier::{FrontierRelaxation, FrontierRounds};
pub use tree::{DistanceMap, SearchTree};

/// A single-source shortest-path strategy.
///
/// Implementors only provide [`search`](Self::search); distance maps and
/// point-to-point paths are derived from the resulting [`SearchTree`].
pub trait ShortestPath {
    /// Tag identifying the strategy.
    fn algorithm(&self) -> PathAlgorithm;

    /// Human-readable strategy name for logs and reports.
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Explores `graph` from `source`. When `target` is given the strategy
    /// may stop once the target's distance is final.
    fn search(&self, graph: &Graph, source: &VertexId, target: Option<&VertexId>) -> SearchTree;

    /// Distance from `source` to every reachable vertex.
    fn distance_map(&self, graph: &Graph, source: &VertexId) -> DistanceMap {
        self.search(graph, source, None).into_distances()
    }

    /// Cheapest path from `source` to `target`.
    ///
    /// Fails with [`Error::UnreachableVertex`] if no path exists.
    fn shortest_path(
        &self,
        graph: &Graph,
        source: &VertexId,
        target: &VertexId,
    ) -> Result<PathResult> {
        self.search(graph, source, Some(target)).path_to(target)
    }
}

/// Enumerated tag for the available strategies, doubling as their factory.
///
/// # Examples
///
/// ```
/// use u_postman::shortest_path::{FrontierRounds, PathAlgorithm};
///
/// let alg: PathAlgorithm = "dijkstra_pq".parse().unwrap();
/// assert_eq!(alg, PathAlgorithm::DijkstraHeap);
///
/// let engine = alg.create(FrontierRounds::default());
/// assert_eq!(engine.name(), "Dijkstra-PriorityQueue");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    DijkstraHeap,
    DijkstraScan,
    FrontierRelaxation,
}

impl PathAlgorithm {
    /// Every strategy, in a fixed order.
    pub const ALL: [PathAlgorithm; 3] = [
        PathAlgorithm::DijkstraHeap,
        PathAlgorithm::DijkstraScan,
        PathAlgorithm::FrontierRelaxation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PathAlgorithm::DijkstraHeap => "Dijkstra-PriorityQueue",
            PathAlgorithm::DijkstraScan => "Dijkstra-List",
            PathAlgorithm::FrontierRelaxation => "Frontier-Relaxation",
        }
    }

    /// Builds the strategy. `rounds` only applies to
    /// [`PathAlgorithm::FrontierRelaxation`].
    pub fn create(self, rounds: FrontierRounds) -> Box<dyn ShortestPath> {
        match self {
            PathAlgorithm::DijkstraHeap => Box::new(DijkstraHeap),
            PathAlgorithm::DijkstraScan => Box::new(DijkstraScan),
            PathAlgorithm::FrontierRelaxation => Box::new(FrontierRelaxation::new(rounds)),
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "dijkstra_heap" | "dijkstra_pq" | "dijkstra_priorityqueue" => {
                Ok(PathAlgorithm::DijkstraHeap)
            }
            "dijkstra_scan" | "dijkstra_list" => Ok(PathAlgorithm::DijkstraScan),
            "frontier_relaxation" | "frontier" | "sssp" => Ok(PathAlgorithm::FrontierRelaxation),
            _ => Err(Error::configuration(format!("unknown path algorithm '{s}'"))),
        }
    }
}
