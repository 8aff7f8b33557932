//! Value types for statement objects and edge payloads.
//!
//! Values are the typed payloads a statement can attach to a predicate.
//! The `Default` variant carries untyped text as received from the client;
//! a `Default` value spelling `*` is the default-value wildcard used by
//! delete statements.

use std::fmt;

/// The default-value wildcard spelling.
pub const STAR: &str = "*";

/// A typed payload attached to a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Untyped text, stored as received.
    Default(String),
    /// UTF-8 string.
    Str(String),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Value {
    /// The default-value wildcard.
    pub fn star() -> Self {
        Value::Default(STAR.to_string())
    }

    /// Returns true if this is the default-value wildcard.
    pub fn is_star(&self) -> bool {
        matches!(self, Value::Default(s) if s == STAR)
    }

    /// Get as string slice if this is a Default or Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Default(s) | Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Default(_) => "Default",
            Value::Str(_) => "Str",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::Bytes(_) => "Bytes",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Default(s) => write!(f, "{}", s),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_detection() {
        assert!(Value::star().is_star());
        assert!(!Value::Default("p".to_string()).is_star());
        // Only Default-typed stars count as the wildcard.
        assert!(!Value::Str(STAR.to_string()).is_star());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(1).type_name(), "Int");
        assert_eq!(Value::star().type_name(), "Default");
    }
}
