//! Quiver Core Types
//!
//! This crate provides the foundational types used throughout the quiver
//! write path:
//! - Identity types (Uid, EntityRef, Subject, Predicate)
//! - Value types (the Value enum with all scalar payload types)
//! - Statement structures (NQuad, Mutation)
//! - Edge structures (DirectedEdge, EdgeValue, EdgeOp, TxnContext)
//! - Facet metadata and its canonical normalization

mod edge;
mod facet;
mod id;
mod nquad;
mod value;

pub use edge::*;
pub use facet::*;
pub use id::*;
pub use nquad::*;
pub use value::*;
