//! Mutation pipeline - coordinates the write-path stages.
//!
//! The pipeline delegates to the operation modules in `ops/`:
//! - `ops/allocate.rs` - blank-node uid allocation
//! - `ops/translate.rs` - statement-to-edge translation
//! - `ops/expand.rs` - wildcard delete expansion
//!
//! All state is request-scoped: the pipeline itself only borrows its
//! collaborators and carries the expansion gate, so concurrent requests
//! never share mutable state through it.

use quiver_cluster::{CommitService, LeaseAuthority, SchemaView, SnapshotStore};
use quiver_core::{DirectedEdge, Mutation, NQuad, TxnContext, Uid};
use std::collections::HashMap;

use crate::config::MutationConfig;
use crate::error::{MutationError, MutationResult};
use crate::ops;

/// The write-path preprocessing pipeline.
pub struct MutationPipeline<'a, L, S, V, C> {
    authority: &'a L,
    store: &'a S,
    schema: &'a V,
    commit: &'a C,
    config: MutationConfig,
}

impl<'a, L, S, V, C> MutationPipeline<'a, L, S, V, C>
where
    L: LeaseAuthority,
    S: SnapshotStore,
    V: SchemaView,
    C: CommitService,
{
    /// Create a pipeline over the given collaborators.
    pub fn new(
        authority: &'a L,
        store: &'a S,
        schema: &'a V,
        commit: &'a C,
        config: MutationConfig,
    ) -> Self {
        Self {
            authority,
            store,
            schema,
            commit,
            config,
        }
    }

    /// Allocate uids for every blank-node label in `statements`.
    pub fn allocate(&self, statements: &[NQuad]) -> MutationResult<HashMap<String, Uid>> {
        ops::allocate_identifiers(self.authority, statements)
    }

    /// Resolve a mutation into directed edges: allocate, then translate.
    pub fn resolve(&self, mutation: &Mutation) -> MutationResult<Vec<DirectedEdge>> {
        let assigned = ops::allocate_identifiers(self.authority, mutation.statements())?;
        let mut edges = Vec::with_capacity(mutation.set.len() + mutation.del.len());
        ops::translate_to_edges(&mutation.set, &mutation.del, &assigned, &mut edges)?;
        Ok(edges)
    }

    /// Apply a mutation end to end and return the commit protocol's
    /// transaction context.
    ///
    /// With expansion disabled, any wildcard-predicate statement fails
    /// fast before a single network call is made. Errors from the commit
    /// protocol are trace-logged and returned unchanged; no retries happen
    /// at this layer.
    pub fn apply(&self, mutation: &Mutation) -> MutationResult<TxnContext> {
        if !self.config.expand_wildcards
            && mutation.statements().any(|nq| nq.predicate.is_star())
        {
            return Err(MutationError::ExpansionDisabled);
        }

        let mut edges = self.resolve(mutation)?;

        if self.config.expand_wildcards {
            edges = ops::expand_wildcards(self.store, self.schema, edges, mutation.start_ts)?;
            tracing::trace!(count = edges.len(), "added internal edges");
        }

        match self.commit.commit(&edges, mutation.start_ts) {
            Ok(ctx) => Ok(ctx),
            Err(err) => {
                tracing::trace!(error = %err, "commit over network failed");
                Err(err.into())
            }
        }
    }
}
