//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shortest_path::{FrontierRounds, PathAlgorithm};

/// Configuration for a [`Solver`](super::Solver).
///
/// # Examples
///
/// ```
/// use u_postman::shortest_path::{FrontierRounds, PathAlgorithm};
/// use u_postman::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_algorithm(PathAlgorithm::FrontierRelaxation)
///     .with_frontier_rounds(FrontierRounds::Fixed(4));
/// assert_eq!(config.algorithm, PathAlgorithm::FrontierRelaxation);
///
/// let loaded = SolverConfig::from_json(r#"{ "algorithm": "dijkstra_scan" }"#).unwrap();
/// assert_eq!(loaded.algorithm, PathAlgorithm::DijkstraScan);
/// assert_eq!(loaded.frontier_rounds, FrontierRounds::Log2Vertices);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Shortest-path strategy used while balancing.
    pub algorithm: PathAlgorithm,
    /// Round policy for [`PathAlgorithm::FrontierRelaxation`].
    pub frontier_rounds: FrontierRounds,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: PathAlgorithm::DijkstraHeap,
            frontier_rounds: FrontierRounds::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_algorithm(mut self, algorithm: PathAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_frontier_rounds(mut self, rounds: FrontierRounds) -> Self {
        self.frontier_rounds = rounds;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::invalid_input(format!("solver config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.algorithm, PathAlgorithm::DijkstraHeap);
        assert_eq!(c.frontier_rounds, FrontierRounds::Log2Vertices);
    }

    #[test]
    fn test_fixed_rounds_from_json() {
        let c = SolverConfig::from_json(
            r#"{ "algorithm": "frontier_relaxation", "frontier_rounds": { "fixed": 4 } }"#,
        )
        .expect("valid config");
        assert_eq!(c.algorithm, PathAlgorithm::FrontierRelaxation);
        assert_eq!(c.frontier_rounds, FrontierRounds::Fixed(4));
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(SolverConfig::from_json("{}").expect("valid"), SolverConfig::default());
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = SolverConfig::from_json(r#"{ "algorithm": "bellman_ford" }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
