//! Directed edge structures.
//!
//! A DirectedEdge is the fully-resolved unit the commit layer accepts: no
//! blank-node labels remain, and the only wildcard that may survive is the
//! documented entity-wildcard delete passthrough (zero entity with a star
//! value), which the commit layer itself rejects unless administrative
//! expansion is enabled cluster-wide.

use crate::{Facet, Predicate, Uid, Value};

/// Reserved internal attribute recording which predicates an entity claims.
pub const PREDICATE_ATTR: &str = "_predicate_";

/// Prefix distinguishing reverse bookkeeping values from forward ones.
pub const REVERSE_PREFIX: char = '~';

/// Operation kind stamped on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOp {
    /// Add the edge.
    Set,
    /// Remove the edge.
    Del,
}

/// The value side of a directed edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeValue {
    /// A target entity identifier.
    Ref(Uid),
    /// A typed payload.
    Data(Value),
}

impl EdgeValue {
    /// Get the target uid if this is a reference value.
    pub fn target(&self) -> Option<Uid> {
        match self {
            EdgeValue::Ref(uid) => Some(*uid),
            EdgeValue::Data(_) => None,
        }
    }

    /// Returns true if this is the default-value wildcard payload.
    pub fn is_star(&self) -> bool {
        matches!(self, EdgeValue::Data(v) if v.is_star())
    }
}

/// A fully-resolved directed edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedEdge {
    /// Source entity. `Uid::ZERO` only in the administrative passthrough
    /// shape.
    pub entity: Uid,
    /// Predicate. Star only before wildcard expansion or in the
    /// passthrough shape.
    pub attr: Predicate,
    /// Payload or target reference.
    pub value: EdgeValue,
    /// Operation kind.
    pub op: EdgeOp,
    /// Canonically-ordered facets.
    pub facets: Vec<Facet>,
}

impl DirectedEdge {
    /// Create an edge with no facets.
    pub fn new(entity: Uid, attr: Predicate, value: EdgeValue, op: EdgeOp) -> Self {
        Self {
            entity,
            attr,
            value,
            op,
            facets: Vec::new(),
        }
    }

    /// Attach facets to this edge.
    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    /// Forward bookkeeping edge: entity no longer (or newly) claims `pred`.
    pub fn predicate_entry(entity: Uid, pred: &str, op: EdgeOp) -> Self {
        Self::new(
            entity,
            Predicate::name(PREDICATE_ATTR),
            EdgeValue::Data(Value::Default(pred.to_string())),
            op,
        )
    }

    /// Reverse bookkeeping edge: `target` drops its reverse entry for
    /// `pred`. The value carries the reverse prefix so the commit layer can
    /// tell forward bookkeeping from reverse bookkeeping.
    pub fn reverse_entry(target: Uid, pred: &str, op: EdgeOp) -> Self {
        Self::new(
            target,
            Predicate::name(PREDICATE_ATTR),
            EdgeValue::Data(Value::Default(format!("{}{}", REVERSE_PREFIX, pred))),
            op,
        )
    }

    /// Returns true if this edge has the administrative passthrough shape:
    /// unresolved wildcard subject deleting a wildcard value.
    pub fn is_star_all_delete(&self) -> bool {
        self.op == EdgeOp::Del && self.entity.is_zero() && self.value.is_star()
    }
}

/// Transaction context returned by the commit protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxnContext {
    /// Read timestamp the mutation was staged at.
    pub start_ts: u64,
    /// Commit timestamp assigned by the commit protocol.
    pub commit_ts: u64,
    /// True if the transaction was aborted instead of committed.
    pub aborted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookkeeping_edges() {
        let fwd = DirectedEdge::predicate_entry(Uid::new(3), "friend", EdgeOp::Del);
        assert_eq!(fwd.attr, Predicate::name(PREDICATE_ATTR));
        assert_eq!(
            fwd.value,
            EdgeValue::Data(Value::Default("friend".to_string()))
        );

        let rev = DirectedEdge::reverse_entry(Uid::new(9), "friend", EdgeOp::Del);
        assert_eq!(rev.entity, Uid::new(9));
        assert_eq!(
            rev.value,
            EdgeValue::Data(Value::Default("~friend".to_string()))
        );
    }

    #[test]
    fn test_star_all_delete_shape() {
        let passthrough = DirectedEdge::new(
            Uid::ZERO,
            Predicate::name("p"),
            EdgeValue::Data(Value::star()),
            EdgeOp::Del,
        );
        assert!(passthrough.is_star_all_delete());

        // A resolved entity never matches the shape.
        let normal = DirectedEdge::new(
            Uid::new(1),
            Predicate::name("p"),
            EdgeValue::Data(Value::star()),
            EdgeOp::Del,
        );
        assert!(!normal.is_star_all_delete());

        // Neither does a set edge.
        let set = DirectedEdge::new(
            Uid::ZERO,
            Predicate::name("p"),
            EdgeValue::Data(Value::star()),
            EdgeOp::Set,
        );
        assert!(!set.is_star_all_delete());
    }
}
