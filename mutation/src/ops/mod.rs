//! Mutation operation implementations.
//!
//! Each stage of the write path (allocate, translate, expand) is
//! implemented in its own module for better organization and testability.

mod allocate;
mod expand;
mod translate;

pub use allocate::{allocate_identifiers, LEASE_MARGIN};
pub use expand::expand_wildcards;
pub use translate::translate_to_edges;
