//! Error types for the ordgraph library.

use thiserror::Error;

/// All errors that can occur in the ordgraph library.
#[derive(Error, Debug)]
pub enum DsError {
    /// A mandatory argument is missing or could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Removal of a connection that does not exist.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// A search or targeted traversal found no match.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DsError {
    /// Build an `EdgeNotFound` from two endpoints, rendered with `Debug`.
    pub fn edge_not_found<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Convenience result type for ordgraph operations.
pub type DsResult<T> = Result<T, DsError>;
