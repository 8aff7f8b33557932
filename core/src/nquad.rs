//! Client statement structures.
//!
//! An NQuad is one add/delete statement as produced by the query-language
//! parser: a subject reference, a predicate, an object and optional facets.
//! A Mutation groups the statements of one request together with the read
//! timestamp that fixes the snapshot used for wildcard expansion.

use crate::{EntityRef, Facet, Predicate, Subject, Value};

/// The object position of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum NQuadObject {
    /// A reference to another entity (concrete or blank).
    Node(EntityRef),
    /// A typed value payload.
    Value(Value),
}

impl NQuadObject {
    /// Create an object referencing an entity by uid.
    pub fn uid(value: u64) -> Self {
        NQuadObject::Node(EntityRef::uid(value))
    }

    /// Create an object referencing a blank node.
    pub fn blank(label: impl Into<String>) -> Self {
        NQuadObject::Node(EntityRef::blank(label))
    }

    /// The default-value wildcard object.
    pub fn star() -> Self {
        NQuadObject::Value(Value::star())
    }

    /// Get the entity reference if this object is one.
    pub fn node_ref(&self) -> Option<&EntityRef> {
        match self {
            NQuadObject::Node(r) => Some(r),
            NQuadObject::Value(_) => None,
        }
    }

    /// Returns true if this is the default-value wildcard.
    pub fn is_star(&self) -> bool {
        matches!(self, NQuadObject::Value(v) if v.is_star())
    }
}

/// A single client statement.
#[derive(Debug, Clone, PartialEq)]
pub struct NQuad {
    /// Subject reference.
    pub subject: Subject,
    /// Predicate name or wildcard.
    pub predicate: Predicate,
    /// Object reference or value.
    pub object: NQuadObject,
    /// Ordered facet metadata.
    pub facets: Vec<Facet>,
}

impl NQuad {
    /// Create a statement with no facets.
    pub fn new(subject: Subject, predicate: Predicate, object: NQuadObject) -> Self {
        Self {
            subject,
            predicate,
            object,
            facets: Vec::new(),
        }
    }

    /// Attach facets to this statement.
    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    /// Returns true if this statement has the administrative delete-all
    /// shape: universal-wildcard subject with default-value wildcard object.
    /// That operation belongs to the schema alteration path, never to
    /// ordinary mutation.
    pub fn is_admin_shape(&self) -> bool {
        self.subject.is_star() && self.object.is_star()
    }
}

/// One mutation request: statements to set, statements to delete, and the
/// read timestamp fixing the snapshot wildcard expansion reads from.
#[derive(Debug, Clone, Default)]
pub struct Mutation {
    /// Statements to add.
    pub set: Vec<NQuad>,
    /// Statements to delete.
    pub del: Vec<NQuad>,
    /// Read timestamp for point-in-time storage reads.
    pub start_ts: u64,
}

impl Mutation {
    /// Create an empty mutation at the given read timestamp.
    pub fn new(start_ts: u64) -> Self {
        Self {
            set: Vec::new(),
            del: Vec::new(),
            start_ts,
        }
    }

    /// Append a statement to the set list.
    pub fn add_set(mut self, nq: NQuad) -> Self {
        self.set.push(nq);
        self
    }

    /// Append a statement to the delete list.
    pub fn add_del(mut self, nq: NQuad) -> Self {
        self.del.push(nq);
        self
    }

    /// Iterate over every statement, set list first.
    pub fn statements(&self) -> impl Iterator<Item = &NQuad> {
        self.set.iter().chain(self.del.iter())
    }
}
