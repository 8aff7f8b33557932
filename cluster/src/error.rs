//! Cluster error types.

use thiserror::Error;

/// Result type for cluster operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors surfaced by external collaborators.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("Network error: {detail}")]
    Network { detail: String },

    #[error("Lease authority error: {detail}")]
    Lease { detail: String },

    #[error("Storage error: {detail}")]
    Storage { detail: String },

    #[error("Transaction aborted")]
    Aborted,
}

impl ClusterError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn lease(detail: impl Into<String>) -> Self {
        Self::Lease {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }
}
