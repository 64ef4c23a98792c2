//! Error taxonomy shared by the collections and the graph core.
//!
//! Absent keys are modelled as `Option` everywhere; only structural
//! preconditions surface as a [`GraphError`].

use thiserror::Error;

/// The error type for graph and collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation referenced a vertex identifier that is not in the graph.
    #[error("vertex {0} does not exist")]
    VertexNotFound(String),

    /// A weight operation referenced an arc that is not stored.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound {
        /// Rendered source identifier.
        from: String,
        /// Rendered destination identifier.
        to: String,
    },

    /// The operation is not meaningful for the receiver's current shape.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Positional access beyond the populated range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of populated positions.
        len: usize,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A traversal loop ran past its step budget.
    #[error("traversal exceeded its budget of {limit} steps")]
    IterationLimit {
        /// The step budget that was exhausted.
        limit: usize,
    },
}

impl GraphError {
    pub(crate) fn vertex_not_found<I: core::fmt::Debug>(id: &I) -> Self {
        GraphError::VertexNotFound(format!("{id:?}"))
    }

    pub(crate) fn edge_not_found<I: core::fmt::Debug>(from: &I, to: &I) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, GraphError>;
