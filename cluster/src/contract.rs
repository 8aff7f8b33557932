//! Collaborator contracts consumed by the mutation pipeline.
//!
//! All calls are synchronous; cancellation and deadlines belong to the
//! implementations behind these traits. Correctness under concurrency is
//! delegated outward: the lease authority must hand out non-overlapping
//! ranges, and the snapshot store must serve a consistent view at a given
//! read timestamp.

use crate::ClusterResult;
use quiver_core::{DirectedEdge, TxnContext, Uid};

/// A contiguous half-open uid range `[start, end)` granted to exactly one
/// requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    /// First uid in the range.
    pub start: Uid,
    /// One past the last uid in the range.
    pub end: Uid,
}

impl IdRange {
    /// Create a range.
    pub fn new(start: Uid, end: Uid) -> Self {
        Self { start, end }
    }

    /// Number of uids in the range.
    pub fn len(&self) -> u64 {
        self.end.value().saturating_sub(self.start.value())
    }

    /// Returns true if the range grants no uids.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The cluster service that hands out non-overlapping uid ranges.
pub trait LeaseAuthority {
    /// Request a contiguous range of `count` fresh uids. One network round
    /// trip per call.
    fn assign_ids(&self, count: u64) -> ClusterResult<IdRange>;

    /// The current lease ceiling. Propagated asynchronously, so it may lag
    /// the true cluster state by a bounded delay.
    fn max_lease_id(&self) -> Uid;
}

/// Point-in-time reads against the posting-list storage layer.
pub trait SnapshotStore {
    /// Read the predicate sets attached to `entity` as of `read_ts`.
    ///
    /// The result is a value matrix: one inner list per queried entity.
    /// Callers querying a single entity expect exactly one inner list.
    fn predicate_lists(&self, entity: Uid, read_ts: u64) -> ClusterResult<Vec<Vec<String>>>;

    /// Read the full adjacency list for `(predicate, entity)` as of
    /// `read_ts`.
    fn adjacency(&self, predicate: &str, entity: Uid, read_ts: u64) -> ClusterResult<Vec<Uid>>;
}

/// Schema registry lookups needed by the write path.
pub trait SchemaView {
    /// Returns true if the schema maintains a reverse index for
    /// `predicate`.
    fn is_reverse_indexed(&self, predicate: &str) -> bool;
}

/// The distributed commit protocol.
pub trait CommitService {
    /// Apply the resolved edges and return a transaction context.
    fn commit(&self, edges: &[DirectedEdge], start_ts: u64) -> ClusterResult<TxnContext>;
}
