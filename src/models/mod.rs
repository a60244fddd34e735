//! Graph model types for route inspection.
//!
//! Provides vertex identifiers, real and virtual edges, the graph store with
//! its degree-balance bookkeeping, path values and the final solution.

mod edge;
mod graph;
mod path;
mod solution;
mod vertex;

pub use edge::{Edge, EdgeId, EdgeKind};
pub use graph::Graph;
pub use path::{BalancingPath, PathResult};
pub use solution::Solution;
pub use vertex::VertexId;
