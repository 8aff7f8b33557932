//! Identifier allocation - assigns uids to blank-node labels.
//!
//! Walks every subject and object reference in the statement list. Blank
//! labels are collected into a request-scoped map; concrete uids are
//! bound-checked against the lease ceiling on sight. If any labels were
//! collected, a single contiguous range is requested from the lease
//! authority and labels are assigned by walking a cursor through it, so one
//! mutation costs at most one allocation round trip no matter how many
//! blank nodes it mentions.

use quiver_cluster::LeaseAuthority;
use quiver_core::{EntityRef, NQuad, Subject, Uid};
use std::collections::HashMap;

use crate::error::{MutationError, MutationResult};

/// Slack added to the lease ceiling when validating client-supplied uids.
/// The ceiling is propagated asynchronously from the lease authority, so a
/// freshly leased uid may arrive before the ceiling update does.
pub const LEASE_MARGIN: u64 = 10_000;

/// Fail if a client-supplied uid exceeds the lease ceiling plus margin.
fn verify_uid<L: LeaseAuthority>(authority: &L, uid: Uid) -> MutationResult<()> {
    let max_lease = authority.max_lease_id();
    if uid.value() > max_lease.value() + LEASE_MARGIN {
        return Err(MutationError::UidOutOfRange { uid, max_lease });
    }
    Ok(())
}

/// Collect one reference: blank labels go into the map unassigned,
/// concrete uids are validated immediately.
fn collect_ref<L: LeaseAuthority>(
    authority: &L,
    entity: &EntityRef,
    assigned: &mut HashMap<String, Uid>,
) -> MutationResult<()> {
    match entity {
        EntityRef::Blank(label) => {
            assigned.entry(label.clone()).or_insert(Uid::ZERO);
        }
        EntityRef::Uid(uid) => verify_uid(authority, *uid)?,
    }
    Ok(())
}

/// Produce a mapping from every blank-node label in `statements` to a
/// freshly leased uid.
///
/// A label appearing in several statements resolves to a single uid. The
/// administrative delete-all shape carries no uid to assign and is skipped
/// here; it is rejected during translation. When no blank labels appear, no
/// allocation call is made at all.
pub fn allocate_identifiers<'a, L, I>(
    authority: &L,
    statements: I,
) -> MutationResult<HashMap<String, Uid>>
where
    L: LeaseAuthority,
    I: IntoIterator<Item = &'a NQuad>,
{
    let mut assigned: HashMap<String, Uid> = HashMap::new();

    for nq in statements {
        // No uid to assign for the delete-all shape.
        if nq.is_admin_shape() {
            continue;
        }

        if let Subject::Node(entity) = &nq.subject {
            collect_ref(authority, entity, &mut assigned)?;
        }
        if let Some(entity) = nq.object.node_ref() {
            collect_ref(authority, entity, &mut assigned)?;
        }
    }

    if !assigned.is_empty() {
        let range = match authority.assign_ids(assigned.len() as u64) {
            Ok(range) => range,
            Err(err) => {
                tracing::trace!(error = %err, "uid allocation failed");
                return Err(err.into());
            }
        };

        let mut cursor = range.start.value();
        for uid in assigned.values_mut() {
            // Overrunning the granted range means the lease authority broke
            // its protocol; this is not a user error.
            if cursor == 0 || cursor >= range.end.value() {
                return Err(MutationError::LeaseOverrun {
                    start: range.start,
                    end: range.end,
                });
            }
            *uid = Uid::new(cursor);
            cursor += 1;
        }
    }

    Ok(assigned)
}
