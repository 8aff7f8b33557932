//! Facet metadata attached to edges.
//!
//! Facets are key/value annotations on a statement's predicate. Before an
//! edge is built they are normalized: sorted by key into a canonical order
//! and checked for duplicate or malformed keys. Canonical order makes later
//! consistency checks and storage order deterministic.

use crate::Value;
use thiserror::Error;

/// Allowed facet key shape: alphanumeric plus `_`, `-` and `.`, non-empty.
const FACET_KEY_PATTERN: &str = r"^[a-zA-Z0-9_][a-zA-Z0-9_\-.]*$";

/// Result type for facet operations.
pub type FacetResult<T> = Result<T, FacetError>;

/// Errors raised during facet normalization.
#[derive(Debug, Error)]
pub enum FacetError {
    #[error("Invalid facet key: {key}")]
    InvalidKey { key: String },

    #[error("Duplicate facet key: {key}")]
    DuplicateKey { key: String },

    #[error("Facet key pattern failed to compile: {message}")]
    Pattern { message: String },
}

/// A key/value metadata annotation on an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    /// Facet key.
    pub key: String,
    /// Facet value.
    pub value: Value,
}

impl Facet {
    /// Create a new facet.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Sort facets into canonical key order and validate every key.
///
/// Fails on duplicate keys and on keys that do not match the allowed key
/// shape. The sort is stable, so facets are deterministic after this call
/// for any input order.
pub fn sort_and_validate(facets: &mut [Facet]) -> FacetResult<()> {
    let re = regex_lite::Regex::new(FACET_KEY_PATTERN).map_err(|e| FacetError::Pattern {
        message: e.to_string(),
    })?;

    for facet in facets.iter() {
        if !re.is_match(&facet.key) {
            return Err(FacetError::InvalidKey {
                key: facet.key.clone(),
            });
        }
    }

    facets.sort_by(|a, b| a.key.cmp(&b.key));

    for pair in facets.windows(2) {
        if pair[0].key == pair[1].key {
            return Err(FacetError::DuplicateKey {
                key: pair[0].key.clone(),
            });
        }
    }

    Ok(())
}
