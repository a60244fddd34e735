//! Route inspection solver.
//!
//! Drives a graph through balancing, circuit construction, expansion and
//! costing. [`Solver::solve`] runs every stage; [`Solver::start`] hands back
//! a [`SolveRun`] that can be stepped one state at a time.
//!
//! # Examples
//!
//! ```
//! use u_postman::models::Graph;
//! use u_postman::solver::{Solver, SolverConfig};
//!
//! let mut g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0)]).unwrap();
//! let sol = Solver::new(SolverConfig::default()).solve(&mut g, &"A".into()).unwrap();
//! assert_eq!(sol.route_ids(), vec!["A", "B", "C", "B", "A"]);
//! assert_eq!(sol.total_cost(), 4.0);
//! ```

mod config;
mod run;

use log::info;

use crate::error::Result;
use crate::models::{Graph, Solution, VertexId};
use crate::shortest_path::{PathAlgorithm, ShortestPath};

pub use config::SolverConfig;
pub use run::{SolveRun, SolverState};

/// Chinese postman solver bound to one shortest-path strategy.
pub struct Solver {
    config: SolverConfig,
    engine: Box<dyn ShortestPath>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        let engine = config.algorithm.create(config.frontier_rounds);
        Self { config, engine }
    }

    /// Solver with the default configuration and the given strategy.
    pub fn with_algorithm(algorithm: PathAlgorithm) -> Self {
        Self::new(SolverConfig::default().with_algorithm(algorithm))
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn algorithm(&self) -> PathAlgorithm {
        self.config.algorithm
    }

    /// Starts a run on `graph` from `origin` without advancing it.
    pub fn start<'a>(&'a self, graph: &'a mut Graph, origin: &VertexId) -> SolveRun<'a> {
        SolveRun::new(graph, origin.clone(), self.engine.as_ref())
    }

    /// Computes a closed walk from `origin` covering every edge of `graph`
    /// at least once, at minimum added cost under greedy pairing.
    ///
    /// Virtual edges for the balancing paths are added to `graph`.
    pub fn solve(&self, graph: &mut Graph, origin: &VertexId) -> Result<Solution> {
        info!(
            "solving from {origin} with {} ({} vertices, {} edges, {})",
            self.engine.name(),
            graph.vertex_count(),
            graph.edge_count(),
            if graph.is_directed() { "directed" } else { "undirected" }
        );
        let solution = self.start(graph, origin).finish()?;
        info!(
            "{}: {} steps, total cost {}",
            self.engine.name(),
            solution.num_steps(),
            solution.total_cost()
        );
        Ok(solution)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Solves `graph` from `origin` with `algorithm` and default settings.
pub fn solve(graph: &mut Graph, origin: &VertexId, algorithm: PathAlgorithm) -> Result<Solution> {
    Solver::with_algorithm(algorithm).solve(graph, origin)
}
