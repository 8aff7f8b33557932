//! Wildcard expansion - concrete edges out of wildcard deletes.
//!
//! Each input edge becomes one or more output edges:
//! - an explicit predicate stays a single edge for that predicate,
//! - a wildcard predicate fans out over the predicate set the entity holds
//!   at the mutation's read timestamp.
//!
//! Every expanded predicate also gets a `_predicate_` bookkeeping edge, and
//! reverse-indexed predicates get one reverse bookkeeping edge per target
//! entity, discovered from the edge's object or from the adjacency list
//! when the object is itself wildcarded.

use quiver_cluster::{SchemaView, SnapshotStore};
use quiver_core::{DirectedEdge, Predicate, Uid};

use crate::error::{MutationError, MutationResult};

/// The concrete predicate set an edge covers.
fn predicates_for<S: SnapshotStore>(
    store: &S,
    edge: &DirectedEdge,
    read_ts: u64,
) -> MutationResult<Vec<String>> {
    match &edge.attr {
        Predicate::Name(name) => Ok(vec![name.clone()]),
        Predicate::Star => {
            let lists = store.predicate_lists(edge.entity, read_ts)?;
            if lists.len() != 1 {
                return Err(MutationError::InconsistentPredicateQuery {
                    entity: edge.entity,
                    lists: lists.len(),
                });
            }
            Ok(lists
                .into_iter()
                .next()
                .unwrap_or_default()
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect())
        }
    }
}

/// The reverse-bookkeeping targets for one predicate of an edge.
fn reverse_targets<S: SnapshotStore>(
    store: &S,
    edge: &DirectedEdge,
    pred: &str,
    read_ts: u64,
) -> MutationResult<Vec<Uid>> {
    if edge.value.is_star() {
        // Object wildcard: every current target of (pred, entity).
        return Ok(store.adjacency(pred, edge.entity, read_ts)?);
    }
    Ok(edge.value.target().into_iter().collect())
}

/// Expand wildcard edges against the snapshot at `read_ts`.
///
/// The administrative passthrough shape (unresolved wildcard subject
/// deleting a wildcard value) is forwarded unexpanded; the commit layer
/// rejects it unless administrative expansion is enabled cluster-wide.
pub fn expand_wildcards<S, V>(
    store: &S,
    schema: &V,
    edges: Vec<DirectedEdge>,
    read_ts: u64,
) -> MutationResult<Vec<DirectedEdge>>
where
    S: SnapshotStore,
    V: SchemaView,
{
    let mut out = Vec::with_capacity(2 * edges.len());

    for edge in edges {
        if edge.is_star_all_delete() {
            // * P * case: not allowed via mutations, rejected downstream.
            out.push(edge);
            continue;
        }

        let preds = predicates_for(store, &edge, read_ts)?;

        for pred in preds {
            let mut narrowed = edge.clone();
            narrowed.attr = Predicate::name(&pred);
            out.push(narrowed);

            out.push(DirectedEdge::predicate_entry(edge.entity, &pred, edge.op));

            if !schema.is_reverse_indexed(&pred) {
                continue;
            }
            for target in reverse_targets(store, &edge, &pred, read_ts)? {
                out.push(DirectedEdge::reverse_entry(target, &pred, edge.op));
            }
        }
    }

    Ok(out)
}
