//! Error type shared by every stage of the solver.

use thiserror::Error as ThisError;

use crate::models::VertexId;

/// Failure of a graph operation or of a `solve` run.
///
/// Every error is terminal for the enclosing `solve` call; no partial
/// solution is ever produced alongside one.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// No path exists from `from` to `to`.
    #[error("vertex {to} is not reachable from vertex {from}")]
    UnreachableVertex {
        /// Search origin.
        from: VertexId,
        /// Requested destination.
        to: VertexId,
    },
    /// A constructed circuit broke one of its postconditions.
    #[error("invalid circuit: {0}")]
    InvalidCircuit(String),
    /// The graph cannot be turned into a closed route from the given origin.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// An edge weight was negative, infinite or NaN.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        /// Edge source.
        from: VertexId,
        /// Edge target.
        to: VertexId,
        /// Offending weight.
        weight: f64,
    },
    /// A graph description could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unreachable(from: &VertexId, to: &VertexId) -> Self {
        Self::UnreachableVertex {
            from: from.clone(),
            to: to.clone(),
        }
    }

    pub fn invalid_circuit(message: impl Into<String>) -> Self {
        Self::InvalidCircuit(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
