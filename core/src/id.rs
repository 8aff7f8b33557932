//! Identity types for the quiver write path.
//!
//! Uids are the globally-unique entity identifiers handed out by the
//! cluster lease authority. References inside client statements are modeled
//! as tagged unions so wildcard and blank-node handling is exhaustive at
//! compile time instead of relying on string sentinels.

use std::fmt;

/// A globally-unique entity identifier.
///
/// `Uid::ZERO` is reserved: on a directed edge it marks an unresolved
/// universal-wildcard subject (the administrative passthrough shape).
/// Ordinary entities always carry non-zero uids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(u64);

impl Uid {
    /// The reserved zero uid.
    pub const ZERO: Uid = Uid(0);

    /// Create a uid from its raw value.
    pub fn new(value: u64) -> Self {
        Uid(value)
    }

    /// The raw numeric value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns true if this is the reserved zero uid.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl From<u64> for Uid {
    fn from(value: u64) -> Self {
        Uid(value)
    }
}

/// A reference to an entity inside a client statement: either an already
/// known uid or a blank-node label awaiting allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    /// A concrete identifier supplied by the client.
    Uid(Uid),
    /// A blank-node label, unique per mutation request.
    Blank(String),
}

impl EntityRef {
    /// Create a concrete reference.
    pub fn uid(value: u64) -> Self {
        EntityRef::Uid(Uid::new(value))
    }

    /// Create a blank-node reference.
    pub fn blank(label: impl Into<String>) -> Self {
        EntityRef::Blank(label.into())
    }

    /// Get the uid if this reference is concrete.
    pub fn as_uid(&self) -> Option<Uid> {
        match self {
            EntityRef::Uid(uid) => Some(*uid),
            EntityRef::Blank(_) => None,
        }
    }

    /// Get the label if this reference is a blank node.
    pub fn as_blank(&self) -> Option<&str> {
        match self {
            EntityRef::Uid(_) => None,
            EntityRef::Blank(label) => Some(label),
        }
    }
}

/// The subject position of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A concrete or blank entity reference.
    Node(EntityRef),
    /// The universal wildcard: every entity.
    Star,
}

impl Subject {
    /// Create a concrete subject.
    pub fn uid(value: u64) -> Self {
        Subject::Node(EntityRef::uid(value))
    }

    /// Create a blank-node subject.
    pub fn blank(label: impl Into<String>) -> Self {
        Subject::Node(EntityRef::blank(label))
    }

    /// Returns true if this is the universal wildcard.
    pub fn is_star(&self) -> bool {
        matches!(self, Subject::Star)
    }
}

/// The predicate position of a statement or edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// A named predicate.
    Name(String),
    /// The predicate wildcard: every predicate attached to the subject.
    Star,
}

impl Predicate {
    /// Create a named predicate.
    pub fn name(name: impl Into<String>) -> Self {
        Predicate::Name(name.into())
    }

    /// Returns true if this is the predicate wildcard.
    pub fn is_star(&self) -> bool {
        matches!(self, Predicate::Star)
    }

    /// Get the name if this predicate is explicit.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Predicate::Name(name) => Some(name),
            Predicate::Star => None,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Name(name) => write!(f, "{}", name),
            Predicate::Star => write!(f, "*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_display_is_hex() {
        assert_eq!(Uid::new(255).to_string(), "0xff");
        assert_eq!(Uid::ZERO.to_string(), "0x0");
    }

    #[test]
    fn test_zero_uid_is_reserved() {
        assert!(Uid::ZERO.is_zero());
        assert!(!Uid::new(1).is_zero());
    }

    #[test]
    fn test_entity_ref_accessors() {
        assert_eq!(EntityRef::uid(7).as_uid(), Some(Uid::new(7)));
        assert_eq!(EntityRef::uid(7).as_blank(), None);
        assert_eq!(EntityRef::blank("a").as_blank(), Some("a"));
        assert_eq!(EntityRef::blank("a").as_uid(), None);
    }

    #[test]
    fn test_predicate_display() {
        assert_eq!(Predicate::name("friend").to_string(), "friend");
        assert_eq!(Predicate::Star.to_string(), "*");
    }
}
