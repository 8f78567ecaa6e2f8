//! Tests for location tracking: presence, nesting, and serialization.

use crate::ast;
use crate::parse;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_no_loc;
use crate::tests::utils::parse_with_loc;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLocation;
use crate::ParseOptions;

// =============================================================================
// Presence
// =============================================================================

/// With locations enabled, every node carries one.
#[test]
fn locations_present_by_default() {
    let doc = parse_with_loc("{ a }");
    assert!(doc.loc.is_some());
    let op = first_operation(&doc);
    assert!(op.loc.is_some());
    assert!(op.selection_set.loc.is_some());
    let field = first_field(&op.selection_set);
    assert!(field.loc.is_some());
    assert!(field.name.loc.is_some());
}

/// With `no_location` set, no node carries one.
#[test]
fn no_location_strips_every_node() {
    let doc = parse_no_loc("query Q($v: Int = 3) @d { a: b(c: [1]) { d } }");
    assert!(doc.loc.is_none());
    let op = first_operation(&doc);
    assert!(op.loc.is_none());
    assert!(op.name.as_ref().unwrap().loc.is_none());
    let var_def = &op.variable_definitions[0];
    assert!(var_def.loc.is_none());
    assert!(var_def.variable.loc.is_none());
    match &var_def.var_type {
        ast::Type::Named(named) => {
            assert!(named.loc.is_none());
            assert!(named.name.loc.is_none());
        }
        other => panic!("Expected a named type, got: {other:?}"),
    }
    let field = first_field(&op.selection_set);
    assert!(field.loc.is_none());
    assert!(field.arguments[0].loc.is_none());
}

// =============================================================================
// Token coverage
// =============================================================================

/// The document's location spans the whole input, from the synthetic
/// SOF marker to the EOF marker.
#[test]
fn document_location_covers_input() {
    let source = "{ a b }";
    let doc = parse_with_loc(source);
    let loc = doc.loc.as_ref().unwrap();
    assert_eq!(loc.start, 0);
    assert_eq!(loc.end, source.len());
    assert_eq!(loc.start_token.kind, GraphQLTokenKind::Sof);
    assert_eq!(loc.end_token.kind, GraphQLTokenKind::Eof);
    assert_eq!(loc.source.body(), source);
}

/// Child locations nest strictly inside parent locations, and sibling
/// locations do not overlap.
#[test]
fn locations_nest_and_siblings_do_not_overlap() {
    let doc = parse_with_loc("query Q { alpha beta }");
    let op = first_operation(&doc);
    let op_loc = op.loc.as_ref().unwrap();
    let set_loc = op.selection_set.loc.as_ref().unwrap();
    assert!(op_loc.start <= set_loc.start && set_loc.end <= op_loc.end);

    let locations: Vec<&GraphQLLocation<'_>> = op
        .selection_set
        .selections
        .iter()
        .map(|s| s.location().unwrap())
        .collect();
    for loc in &locations {
        assert!(set_loc.start <= loc.start && loc.end <= set_loc.end);
    }
    assert!(locations[0].end <= locations[1].start);
}

/// A single-token node's location is exactly that token's range.
#[test]
fn name_location_matches_token_range() {
    let source = "{ hello }";
    let doc = parse_with_loc(source);
    let field = first_field(&first_operation(&doc).selection_set);
    let loc = field.name.loc.as_ref().unwrap();
    assert_eq!(&source[loc.start..loc.end], "hello");
    assert_eq!(loc.start_token.line, 1);
    assert_eq!(loc.start_token.column, 3);
}

// =============================================================================
// Serialization
// =============================================================================

/// The JSON form of a location is `{start, end}` only: token
/// endpoints and the source handle stay out of serialized output.
#[test]
fn location_serializes_to_start_end_only() {
    let doc = parse_with_loc("{ a }");
    let json = serde_json::to_value(doc.loc.as_ref().unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"start": 0, "end": 5}));
}

// =============================================================================
// Structural equality modulo locations
// =============================================================================

/// Location emission does not change the shape of the tree: the same
/// input parsed with and without locations differs only in `loc`.
#[test]
fn no_location_preserves_structure() {
    let source = "{ a(b: 1) }";
    let with_loc = parse(source, ParseOptions::default()).unwrap();
    let without = parse(source, ParseOptions::without_locations()).unwrap();

    let field_with = first_field(&first_operation(&with_loc).selection_set);
    let field_without = first_field(&first_operation(&without).selection_set);
    assert_eq!(field_with.name.value, field_without.name.value);
    assert_eq!(field_with.arguments.len(), field_without.arguments.len());
}
