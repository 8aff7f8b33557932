//! Quiver Cluster Contracts
//!
//! Narrow interfaces onto the external collaborators of the write path.
//!
//! Responsibilities:
//! - Define the lease authority contract (uid range allocation, ceiling)
//! - Define point-in-time snapshot reads against the storage layer
//! - Define the schema view (reverse-index lookup)
//! - Define the distributed commit entry point
//! - Provide in-memory implementations for tests and embedded use
//!
//! The real implementations live behind the network; this crate only fixes
//! the shapes the mutation pipeline consumes.

mod contract;
mod error;
mod memory;

pub use contract::{CommitService, IdRange, LeaseAuthority, SchemaView, SnapshotStore};
pub use error::{ClusterError, ClusterResult};
pub use memory::{MemoryCommit, MemoryLease, MemorySchema, MemoryStore};
