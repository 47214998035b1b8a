//! Errors returned by graph operations.

use thiserror::Error;

use super::GraphKind;

/// Result alias used throughout the graph module.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for adjacency graph operations.
///
/// Every fallible operation validates its arguments before touching any state,
/// so an `Err` always leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A graph was requested with zero vertices.
    #[error("number of vertices must be greater than zero")]
    InvalidSize,

    /// A vertex id outside `[0, size)` was supplied.
    #[error("vertex {vertex} is not in the graph (size {size})")]
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// The vertex count at the time of the call.
        size: usize,
    },

    /// A negative weight was supplied where the graph kind forbids it.
    #[error("weight of edge ({from} -> {to}) cannot be negative")]
    NegativeWeight {
        /// Source of the rejected edge.
        from: usize,
        /// Destination of the rejected edge.
        to: usize,
    },

    /// A weight change targeted an edge that was never registered.
    #[error("edge ({from} -> {to}) does not exist")]
    EdgeNotFound {
        /// Source of the missing edge.
        from: usize,
        /// Destination of the missing edge.
        to: usize,
    },

    /// A weight lookup found no link between the two vertices.
    #[error("no link stored from {from} to {to}")]
    MissingLink {
        /// Row that was searched.
        from: usize,
        /// Neighbour that was looked up.
        to: usize,
    },

    /// The operation is not defined for the graph's kind.
    #[error("`{operation}` is not supported for {kind} graphs")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Kind of the graph the operation was attempted on.
        kind: GraphKind,
    },
}

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A caller-supplied argument was rejected.
    InvalidArgument,
    /// The operation is inconsistent with the graph's kind.
    UnsupportedOperation,
    /// A lookup did not find what it was asked for.
    LookupFailure,
}

impl GraphError {
    /// Returns the category this error belongs to.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            GraphError::InvalidSize
            | GraphError::VertexOutOfBounds { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::EdgeNotFound { .. } => ErrorCategory::InvalidArgument,
            GraphError::Unsupported { .. } => ErrorCategory::UnsupportedOperation,
            GraphError::MissingLink { .. } => ErrorCategory::LookupFailure,
        }
    }
}
