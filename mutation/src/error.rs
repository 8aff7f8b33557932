//! Mutation error types.

use quiver_cluster::ClusterError;
use quiver_core::{FacetError, Uid};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while preprocessing a mutation.
#[derive(Debug, Error)]
pub enum MutationError {
    /// Wildcard expansion is configured off; a wildcard-predicate delete
    /// cannot be satisfied.
    #[error("Wildcard expansion is disabled; cannot perform a wildcard predicate deletion")]
    ExpansionDisabled,

    /// A client-supplied uid exceeds the lease ceiling plus margin.
    #[error("Uid {uid} cannot be greater than lease {max_lease}")]
    UidOutOfRange { uid: Uid, max_lease: Uid },

    /// Delete-all-predicates requested through ordinary mutation.
    #[error("Predicate deletion should be requested via the schema alteration path")]
    PredicateDeletion,

    /// Wildcard subject where a concrete entity is required.
    #[error("Wildcard subject is not allowed in a mutation")]
    WildcardSubject,

    /// A blank-node label referenced by an object was never allocated.
    #[error("Blank node {label} was not assigned a uid")]
    UnresolvedBlank { label: String },

    /// The point-in-time predicate-set query did not return exactly one
    /// list.
    #[error("Expected exactly one predicate list for entity {entity}, got {lists}")]
    InconsistentPredicateQuery { entity: Uid, lists: usize },

    /// The allocation cursor overran its granted range. This is an internal
    /// invariant violation: the lease authority broke its protocol. Fatal
    /// to the request, never caused by client input.
    #[error("Lease range [{start}, {end}) exhausted while assigning uids")]
    LeaseOverrun { start: Uid, end: Uid },

    /// Error from the lease authority, storage layer or commit protocol.
    #[error("Cluster error: {0}")]
    Cluster(#[from] ClusterError),

    /// Facet normalization failure.
    #[error("Facet error: {0}")]
    Facet(#[from] FacetError),
}

impl MutationError {
    pub fn unresolved_blank(label: impl Into<String>) -> Self {
        Self::UnresolvedBlank {
            label: label.into(),
        }
    }

    /// Returns true if this error signals a bug in a trusted internal
    /// dependency rather than bad client input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::LeaseOverrun { .. })
    }
}
