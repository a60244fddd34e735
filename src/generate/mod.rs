//! Seeded random graph generation.
//!
//! Produces connected instances for comparing shortest-path strategies and
//! exercising the solver. The same configuration and seed always yield the
//! same graph.

mod random;

pub use random::RandomGraph;
