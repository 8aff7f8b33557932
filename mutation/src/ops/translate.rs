//! Statement translation - resolved statements become directed edges.
//!
//! Every statement is resolved against the blank-node map built during
//! allocation, its facets normalized into canonical order, and the result
//! stamped SET or DEL according to which list it came from. Output edges
//! land in a caller-owned buffer so partial results stay available for
//! diagnosis when translation aborts midway.

use quiver_core::{
    sort_and_validate, DirectedEdge, EdgeOp, EdgeValue, EntityRef, Facet, NQuad, NQuadObject,
    Subject, Uid,
};
use std::collections::HashMap;

use crate::error::{MutationError, MutationResult};

/// Resolve a subject to its uid.
///
/// A blank label missing from the map is a defensive no-op: allocation
/// guarantees every label is present for well-formed input, but the
/// translator skips the statement rather than faulting.
fn resolve_subject(
    subject: &Subject,
    assigned: &HashMap<String, Uid>,
) -> MutationResult<Option<Uid>> {
    match subject {
        Subject::Star => Err(MutationError::WildcardSubject),
        Subject::Node(EntityRef::Uid(uid)) => Ok(Some(*uid)),
        Subject::Node(EntityRef::Blank(label)) => Ok(assigned.get(label).copied()),
    }
}

/// Resolve an object to an edge value.
fn resolve_object(
    object: &NQuadObject,
    assigned: &HashMap<String, Uid>,
) -> MutationResult<EdgeValue> {
    match object {
        NQuadObject::Node(EntityRef::Uid(uid)) => Ok(EdgeValue::Ref(*uid)),
        NQuadObject::Node(EntityRef::Blank(label)) => assigned
            .get(label)
            .copied()
            .map(EdgeValue::Ref)
            .ok_or_else(|| MutationError::unresolved_blank(label)),
        NQuadObject::Value(value) => Ok(EdgeValue::Data(value.clone())),
    }
}

/// Build one edge from a statement, or skip it when the subject cannot be
/// resolved.
fn parse(
    nq: &NQuad,
    assigned: &HashMap<String, Uid>,
    op: EdgeOp,
) -> MutationResult<Option<DirectedEdge>> {
    let entity = match resolve_subject(&nq.subject, assigned)? {
        Some(uid) => uid,
        None => return Ok(None),
    };

    let mut facets: Vec<Facet> = nq.facets.clone();
    sort_and_validate(&mut facets)?;

    let value = resolve_object(&nq.object, assigned)?;
    Ok(Some(
        DirectedEdge::new(entity, nq.predicate.clone(), value, op).with_facets(facets),
    ))
}

/// Translate the set and delete statement lists into directed edges,
/// appending to `edges` in input order (set list first).
///
/// The delete-all shape in the delete list is rejected outright: deleting
/// every value of a predicate is a schema alteration, not a mutation. On
/// any failure the buffer keeps the edges accumulated so far; they must not
/// be committed.
pub fn translate_to_edges(
    set: &[NQuad],
    del: &[NQuad],
    assigned: &HashMap<String, Uid>,
    edges: &mut Vec<DirectedEdge>,
) -> MutationResult<()> {
    for nq in set {
        if let Some(edge) = parse(nq, assigned, EdgeOp::Set)? {
            edges.push(edge);
        }
    }

    for nq in del {
        if nq.is_admin_shape() {
            return Err(MutationError::PredicateDeletion);
        }
        if let Some(edge) = parse(nq, assigned, EdgeOp::Del)? {
            edges.push(edge);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiver_core::{Predicate, Value};

    fn assigned_map(pairs: &[(&str, u64)]) -> HashMap<String, Uid> {
        pairs
            .iter()
            .map(|(label, uid)| (label.to_string(), Uid::new(*uid)))
            .collect()
    }

    #[test]
    fn test_set_and_del_lists_translate_in_order() {
        // GIVEN
        let set = vec![
            NQuad::new(
                Subject::uid(1),
                Predicate::name("name"),
                NQuadObject::Value(Value::Str("alice".into())),
            ),
            NQuad::new(Subject::uid(1), Predicate::name("friend"), NQuadObject::uid(2)),
        ];
        let del = vec![NQuad::new(
            Subject::uid(3),
            Predicate::name("friend"),
            NQuadObject::star(),
        )];
        let mut edges = Vec::new();

        // WHEN
        translate_to_edges(&set, &del, &HashMap::new(), &mut edges).unwrap();

        // THEN
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].op, EdgeOp::Set);
        assert_eq!(edges[0].attr, Predicate::name("name"));
        assert_eq!(edges[1].value, EdgeValue::Ref(Uid::new(2)));
        assert_eq!(edges[2].op, EdgeOp::Del);
    }

    #[test]
    fn test_blank_labels_resolve_through_map() {
        // GIVEN
        let assigned = assigned_map(&[("a", 100), ("b", 101)]);
        let set = vec![NQuad::new(
            Subject::blank("a"),
            Predicate::name("friend"),
            NQuadObject::blank("b"),
        )];
        let mut edges = Vec::new();

        // WHEN
        translate_to_edges(&set, &[], &assigned, &mut edges).unwrap();

        // THEN
        assert_eq!(edges[0].entity, Uid::new(100));
        assert_eq!(edges[0].value, EdgeValue::Ref(Uid::new(101)));
    }

    #[test]
    fn test_same_label_resolves_identically_everywhere() {
        // GIVEN
        let assigned = assigned_map(&[("a", 100)]);
        let set = vec![
            NQuad::new(
                Subject::blank("a"),
                Predicate::name("name"),
                NQuadObject::Value(Value::Str("x".into())),
            ),
            NQuad::new(Subject::uid(5), Predicate::name("friend"), NQuadObject::blank("a")),
            NQuad::new(
                Subject::blank("a"),
                Predicate::name("age"),
                NQuadObject::Value(Value::Int(3)),
            ),
        ];
        let mut edges = Vec::new();

        // WHEN
        translate_to_edges(&set, &[], &assigned, &mut edges).unwrap();

        // THEN
        assert_eq!(edges[0].entity, Uid::new(100));
        assert_eq!(edges[1].value, EdgeValue::Ref(Uid::new(100)));
        assert_eq!(edges[2].entity, Uid::new(100));
    }

    #[test]
    fn test_admin_shape_in_del_rejected() {
        // GIVEN
        let del = vec![NQuad::new(
            Subject::Star,
            Predicate::name("p"),
            NQuadObject::star(),
        )];
        let mut edges = Vec::new();

        // WHEN
        let err = translate_to_edges(&[], &del, &HashMap::new(), &mut edges).unwrap_err();

        // THEN
        assert!(matches!(err, MutationError::PredicateDeletion));
        assert!(edges.is_empty());
    }

    #[test]
    fn test_wildcard_subject_in_set_rejected_before_any_edge() {
        // GIVEN
        let set = vec![NQuad::new(
            Subject::Star,
            Predicate::name("p"),
            NQuadObject::star(),
        )];
        let mut edges = Vec::new();

        // WHEN
        let err = translate_to_edges(&set, &[], &HashMap::new(), &mut edges).unwrap_err();

        // THEN
        assert!(matches!(err, MutationError::WildcardSubject));
        assert!(edges.is_empty());
    }

    #[test]
    fn test_unmapped_subject_label_is_skipped() {
        // GIVEN
        let set = vec![
            NQuad::new(
                Subject::blank("ghost"),
                Predicate::name("p"),
                NQuadObject::Value(Value::Int(1)),
            ),
            NQuad::new(
                Subject::uid(1),
                Predicate::name("p"),
                NQuadObject::Value(Value::Int(2)),
            ),
        ];
        let mut edges = Vec::new();

        // WHEN
        translate_to_edges(&set, &[], &HashMap::new(), &mut edges).unwrap();

        // THEN: the unresolvable statement is dropped, the rest proceed.
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].entity, Uid::new(1));
    }

    #[test]
    fn test_unmapped_object_label_is_an_error() {
        // GIVEN
        let set = vec![NQuad::new(
            Subject::uid(1),
            Predicate::name("friend"),
            NQuadObject::blank("ghost"),
        )];
        let mut edges = Vec::new();

        // WHEN
        let err = translate_to_edges(&set, &[], &HashMap::new(), &mut edges).unwrap_err();

        // THEN
        assert!(matches!(err, MutationError::UnresolvedBlank { .. }));
    }

    #[test]
    fn test_facets_are_canonicalized() {
        // GIVEN
        let set = vec![NQuad::new(
            Subject::uid(1),
            Predicate::name("friend"),
            NQuadObject::uid(2),
        )
        .with_facets(vec![
            Facet::new("weight", 5i64),
            Facet::new("since", "2020"),
        ])];
        let mut edges = Vec::new();

        // WHEN
        translate_to_edges(&set, &[], &HashMap::new(), &mut edges).unwrap();

        // THEN
        let keys: Vec<_> = edges[0].facets.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["since", "weight"]);
    }

    #[test]
    fn test_facet_failure_keeps_partial_edges() {
        // GIVEN
        let set = vec![
            NQuad::new(Subject::uid(1), Predicate::name("a"), NQuadObject::uid(2)),
            NQuad::new(Subject::uid(1), Predicate::name("b"), NQuadObject::uid(3))
                .with_facets(vec![Facet::new("dup", 1i64), Facet::new("dup", 2i64)]),
        ];
        let mut edges = Vec::new();

        // WHEN
        let err = translate_to_edges(&set, &[], &HashMap::new(), &mut edges).unwrap_err();

        // THEN: first edge survives in the buffer for diagnosis.
        assert!(matches!(err, MutationError::Facet(_)));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].attr, Predicate::name("a"));
    }
}
