//! Eulerian circuit construction on a balanced multigraph.
//!
//! - [`build_circuit`] — Hierholzer's algorithm with an explicit stack
//! - [`validate`] — endpoint and length postconditions
//! - [`expand`] — replaces virtual edges with their hidden paths
//! - [`route_cost`] — sums edge weights along a circuit, each edge once

mod cost;
mod expand;
mod hierholzer;

pub use cost::route_cost;
pub use expand::expand;
pub use hierholzer::{build_circuit, validate, Circuit};
