//! # u-postman
//!
//! Route inspection (Chinese postman) solver for directed and undirected
//! weighted multigraphs: the cheapest closed walk from an origin that
//! traverses every edge at least once.
//!
//! ## Modules
//!
//! - [`models`] — Vertex ids, real and virtual edges, the graph store, paths and solutions
//! - [`shortest_path`] — Interchangeable shortest-path strategies (heap/scan Dijkstra, frontier relaxation)
//! - [`matching`] — Greedy pairing of unbalanced vertices into balancing paths
//! - [`circuit`] — Hierholzer circuit construction, validation, expansion and costing
//! - [`solver`] — The solve state machine and its configuration
//! - [`io`] — Node-link JSON graph descriptions and text reports
//! - [`generate`] — Seeded random connected graphs
//!
//! ## Example
//!
//! ```
//! use u_postman::models::Graph;
//! use u_postman::shortest_path::PathAlgorithm;
//!
//! let mut g = Graph::from_edges(
//!     false,
//!     [("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 3.0), ("D", "A", 4.0)],
//! )
//! .unwrap();
//! let sol = u_postman::solve(&mut g, &"A".into(), PathAlgorithm::DijkstraHeap).unwrap();
//! assert_eq!(sol.route_ids(), vec!["A", "B", "C", "D", "A"]);
//! assert_eq!(sol.total_cost(), 10.0);
//! ```

pub mod circuit;
pub mod error;
pub mod generate;
pub mod io;
pub mod matching;
pub mod models;
pub mod shortest_path;
pub mod solver;

pub use error::{Error, Result};
pub use solver::{solve, Solver, SolverConfig};
