//! In-memory collaborator implementations.
//!
//! Used by tests and embedded single-process deployments. Each type keeps
//! the same observable contract as its networked counterpart, plus counters
//! the pipeline tests use to assert how many calls were made.

use crate::{
    ClusterError, ClusterResult, CommitService, IdRange, LeaseAuthority, SchemaView, SnapshotStore,
};
use quiver_core::{DirectedEdge, TxnContext, Uid};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A single-process lease authority.
pub struct MemoryLease {
    /// Next uid to hand out.
    next: AtomicU64,
    /// Advertised lease ceiling.
    ceiling: AtomicU64,
    /// Number of assign_ids calls served.
    calls: AtomicU64,
    /// When set, every allocation fails with a lease error.
    fail: bool,
}

impl MemoryLease {
    /// Create a lease authority with the given ceiling, allocating from 1.
    pub fn new(ceiling: u64) -> Self {
        Self {
            next: AtomicU64::new(1),
            ceiling: AtomicU64::new(ceiling),
            calls: AtomicU64::new(0),
            fail: false,
        }
    }

    /// Create a lease authority whose allocations always fail.
    pub fn failing() -> Self {
        Self {
            next: AtomicU64::new(1),
            ceiling: AtomicU64::new(0),
            calls: AtomicU64::new(0),
            fail: true,
        }
    }

    /// Number of allocation calls served so far.
    pub fn allocation_calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Raise the advertised ceiling.
    pub fn set_ceiling(&self, ceiling: u64) {
        self.ceiling.store(ceiling, Ordering::SeqCst);
    }
}

impl LeaseAuthority for MemoryLease {
    fn assign_ids(&self, count: u64) -> ClusterResult<IdRange> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ClusterError::lease("lease authority unavailable"));
        }
        let start = self.next.fetch_add(count, Ordering::SeqCst);
        Ok(IdRange::new(Uid::new(start), Uid::new(start + count)))
    }

    fn max_lease_id(&self) -> Uid {
        Uid::new(self.ceiling.load(Ordering::SeqCst))
    }
}

/// A snapshot store backed by hash maps. Read timestamps are accepted but
/// not versioned; the store always serves its current contents.
#[derive(Default)]
pub struct MemoryStore {
    /// Entity -> predicates attached to it.
    predicates: HashMap<Uid, Vec<String>>,
    /// (predicate, entity) -> adjacency list.
    adjacency: HashMap<(String, Uid), Vec<Uid>>,
    /// When set, every read fails with a storage error.
    fail: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose reads always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Record that `entity` has an edge for `predicate` to each target.
    pub fn insert(&mut self, entity: Uid, predicate: &str, targets: Vec<Uid>) {
        let preds = self.predicates.entry(entity).or_default();
        if !preds.iter().any(|p| p == predicate) {
            preds.push(predicate.to_string());
        }
        self.adjacency
            .entry((predicate.to_string(), entity))
            .or_default()
            .extend(targets);
    }

    /// Record that `entity` has a value (non-reference) for `predicate`.
    pub fn insert_value(&mut self, entity: Uid, predicate: &str) {
        self.insert(entity, predicate, Vec::new());
    }
}

impl SnapshotStore for MemoryStore {
    fn predicate_lists(&self, entity: Uid, _read_ts: u64) -> ClusterResult<Vec<Vec<String>>> {
        if self.fail {
            return Err(ClusterError::storage("snapshot store unavailable"));
        }
        let list = self.predicates.get(&entity).cloned().unwrap_or_default();
        Ok(vec![list])
    }

    fn adjacency(&self, predicate: &str, entity: Uid, _read_ts: u64) -> ClusterResult<Vec<Uid>> {
        if self.fail {
            return Err(ClusterError::storage("snapshot store unavailable"));
        }
        Ok(self
            .adjacency
            .get(&(predicate.to_string(), entity))
            .cloned()
            .unwrap_or_default())
    }
}

/// A schema view backed by a set of reverse-indexed predicate names.
#[derive(Default)]
pub struct MemorySchema {
    reversed: HashSet<String>,
}

impl MemorySchema {
    /// Create a schema with no reverse indexes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `predicate` as reverse-indexed.
    pub fn with_reverse(mut self, predicate: &str) -> Self {
        self.reversed.insert(predicate.to_string());
        self
    }
}

impl SchemaView for MemorySchema {
    fn is_reverse_indexed(&self, predicate: &str) -> bool {
        self.reversed.contains(predicate)
    }
}

/// A commit service that records what it is asked to commit.
pub struct MemoryCommit {
    committed: Mutex<Vec<Vec<DirectedEdge>>>,
    next_commit_ts: AtomicU64,
    fail: bool,
    abort: bool,
}

impl MemoryCommit {
    /// Create a commit service that accepts everything.
    pub fn new() -> Self {
        Self {
            committed: Mutex::new(Vec::new()),
            next_commit_ts: AtomicU64::new(1),
            fail: false,
            abort: false,
        }
    }

    /// Create a commit service that rejects every commit with a network
    /// error.
    pub fn failing() -> Self {
        Self {
            committed: Mutex::new(Vec::new()),
            next_commit_ts: AtomicU64::new(1),
            fail: true,
            abort: false,
        }
    }

    /// Create a commit service that aborts every transaction.
    pub fn aborting() -> Self {
        Self {
            committed: Mutex::new(Vec::new()),
            next_commit_ts: AtomicU64::new(1),
            fail: false,
            abort: true,
        }
    }

    /// Edge lists committed so far, in commit order.
    pub fn committed(&self) -> Vec<Vec<DirectedEdge>> {
        self.committed
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryCommit {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitService for MemoryCommit {
    fn commit(&self, edges: &[DirectedEdge], start_ts: u64) -> ClusterResult<TxnContext> {
        if self.fail {
            return Err(ClusterError::network("commit service unreachable"));
        }
        if self.abort {
            return Err(ClusterError::Aborted);
        }
        let commit_ts = start_ts + self.next_commit_ts.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.committed.lock() {
            guard.push(edges.to_vec());
        }
        Ok(TxnContext {
            start_ts,
            commit_ts,
            aborted: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_ranges_are_contiguous_and_disjoint() {
        let lease = MemoryLease::new(10_000);

        let a = lease.assign_ids(3).unwrap();
        let b = lease.assign_ids(2).unwrap();

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
        assert_eq!(a.end, b.start);
        assert_eq!(lease.allocation_calls(), 2);
    }

    #[test]
    fn test_failing_lease_still_counts_calls() {
        let lease = MemoryLease::failing();

        assert!(lease.assign_ids(1).is_err());
        assert_eq!(lease.allocation_calls(), 1);
    }

    #[test]
    fn test_store_serves_exactly_one_predicate_list() {
        let mut store = MemoryStore::new();
        store.insert(Uid::new(1), "friend", vec![Uid::new(2)]);
        store.insert_value(Uid::new(1), "name");

        let lists = store.predicate_lists(Uid::new(1), 5).unwrap();

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0], vec!["friend".to_string(), "name".to_string()]);
    }

    #[test]
    fn test_store_adjacency() {
        let mut store = MemoryStore::new();
        store.insert(Uid::new(1), "friend", vec![Uid::new(2), Uid::new(3)]);

        let targets = store.adjacency("friend", Uid::new(1), 5).unwrap();
        assert_eq!(targets, vec![Uid::new(2), Uid::new(3)]);

        let none = store.adjacency("friend", Uid::new(9), 5).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_schema_reverse_lookup() {
        let schema = MemorySchema::new().with_reverse("friend");

        assert!(schema.is_reverse_indexed("friend"));
        assert!(!schema.is_reverse_indexed("name"));
    }

    #[test]
    fn test_failing_store_reads_error() {
        let store = MemoryStore::failing();

        assert!(matches!(
            store.predicate_lists(Uid::new(1), 5).unwrap_err(),
            ClusterError::Storage { .. }
        ));
        assert!(matches!(
            store.adjacency("friend", Uid::new(1), 5).unwrap_err(),
            ClusterError::Storage { .. }
        ));
    }

    #[test]
    fn test_aborting_commit_surfaces_abort() {
        let commit = MemoryCommit::aborting();

        let err = commit.commit(&[], 7).unwrap_err();

        assert!(matches!(err, ClusterError::Aborted));
        assert!(commit.committed().is_empty());
    }

    #[test]
    fn test_commit_records_edges() {
        let commit = MemoryCommit::new();

        let ctx = commit.commit(&[], 7).unwrap();

        assert_eq!(ctx.start_ts, 7);
        assert!(ctx.commit_ts > 7);
        assert!(!ctx.aborted);
        assert_eq!(commit.committed().len(), 1);
    }
}
