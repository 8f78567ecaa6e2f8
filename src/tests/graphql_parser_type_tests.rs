//! Tests for standalone type reference parsing.

use crate::ast;
use crate::parse_type;
use crate::ParseOptions;

fn parse_type_no_loc(source: &str) -> ast::Type<'_> {
    parse_type(source, ParseOptions::without_locations())
        .expect("type should parse")
}

#[test]
fn named_type() {
    match parse_type_no_loc("Int") {
        ast::Type::Named(named) => assert_eq!(named.name.value, "Int"),
        other => panic!("Expected a named type, got: {other:?}"),
    }
}

#[test]
fn list_type() {
    match parse_type_no_loc("[String]") {
        ast::Type::List(list) => match list.of_type.as_ref() {
            ast::Type::Named(named) => assert_eq!(named.name.value, "String"),
            other => panic!("Expected a named inner type, got: {other:?}"),
        },
        other => panic!("Expected a list type, got: {other:?}"),
    }
}

#[test]
fn non_null_named_type() {
    match parse_type_no_loc("ID!") {
        ast::Type::NonNull(non_null) => {
            assert!(matches!(non_null.of_type.as_ref(), ast::Type::Named(_)));
        }
        other => panic!("Expected a non-null type, got: {other:?}"),
    }
}

/// `[Int!]!` nests as NonNull(List(NonNull(Named))); `!` binds once at
/// each level, never directly to another `!`.
#[test]
fn nested_non_null_list() {
    let ast::Type::NonNull(outer) = parse_type_no_loc("[Int!]!") else {
        panic!("Expected a non-null type");
    };
    let ast::Type::List(list) = outer.of_type.as_ref() else {
        panic!("Expected a list inside the outer non-null");
    };
    let ast::Type::NonNull(inner) = list.of_type.as_ref() else {
        panic!("Expected a non-null element type");
    };
    match inner.of_type.as_ref() {
        ast::Type::Named(named) => assert_eq!(named.name.value, "Int"),
        other => panic!("Expected a named innermost type, got: {other:?}"),
    }
}

#[test]
fn deeply_nested_list_type() {
    let mut current = parse_type_no_loc("[[[Int]]]");
    for _ in 0..3 {
        match current {
            ast::Type::List(list) => current = *list.of_type,
            other => panic!("Expected a list type, got: {other:?}"),
        }
    }
    assert!(matches!(current, ast::Type::Named(_)));
}
