//! Quiver Mutation
//!
//! Write-path preprocessing: turn a client mutation into a fully-resolved
//! list of directed edges and hand it to the distributed commit protocol.
//!
//! Responsibilities:
//! - Allocate uids for blank-node labels under the cluster lease protocol
//! - Validate client-supplied uids against the lease ceiling
//! - Translate statements into directed edges with canonical facets
//! - Expand wildcard deletions into concrete per-predicate edges plus
//!   bookkeeping and reverse-bookkeeping edges
//! - Forward the resolved edges to the commit protocol
//!
//! # Module Structure
//!
//! - `pipeline` - Main MutationPipeline that coordinates operations
//! - `ops/` - Individual operation implementations (allocate, translate,
//!   expand)
//! - `config` - The wildcard-expansion gate
//! - `error` - Error types for mutation failures

mod config;
mod error;
mod ops;
mod pipeline;

pub use config::MutationConfig;
pub use error::{MutationError, MutationResult};
pub use ops::{allocate_identifiers, expand_wildcards, translate_to_edges, LEASE_MARGIN};
pub use pipeline::MutationPipeline;
