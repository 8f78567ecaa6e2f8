//! Tests for document-level and executable-definition parsing.

use crate::ast;
use crate::parse;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_no_loc;
use crate::ParseOptions;
use indoc::indoc;

// =============================================================================
// Operation definitions
// =============================================================================

/// The shorthand form (a bare selection set) parses as an anonymous
/// query with empty variable and directive lists.
#[test]
fn shorthand_query() {
    let doc = parse_no_loc("{ a b }");
    assert_eq!(doc.definitions.len(), 1);

    let op = first_operation(&doc);
    assert_eq!(op.operation, ast::OperationKind::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
    assert!(op.directives.is_empty());

    let names: Vec<&str> = op
        .selection_set
        .selections
        .iter()
        .map(|s| match s {
            ast::Selection::Field(f) => f.name.value.as_ref(),
            other => panic!("Expected a field, got: {other:?}"),
        })
        .collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn named_query_with_operation_keyword() {
    let doc = parse_no_loc("query HeroQuery { hero }");
    let op = first_operation(&doc);
    assert_eq!(op.operation, ast::OperationKind::Query);
    assert_eq!(op.name.as_ref().map(|n| n.value.as_ref()), Some("HeroQuery"));
}

#[test]
fn mutation_and_subscription_keywords() {
    let doc = parse_no_loc("mutation M { write } subscription S { watch }");
    assert_eq!(doc.definitions.len(), 2);

    let first = first_operation(&doc);
    assert_eq!(first.operation, ast::OperationKind::Mutation);
    match &doc.definitions[1] {
        ast::Definition::Operation(op) => {
            assert_eq!(op.operation, ast::OperationKind::Subscription);
        }
        other => panic!("Expected an operation definition, got: {other:?}"),
    }
}

/// Variable definitions carry the variable, its type, and an optional
/// const default value.
#[test]
fn operation_with_variable_definitions() {
    let doc = parse_no_loc("query Q($id: ID!, $limit: Int = 10) { node }");
    let op = first_operation(&doc);
    assert_eq!(op.variable_definitions.len(), 2);

    let id_def = &op.variable_definitions[0];
    assert_eq!(id_def.variable.name.value, "id");
    assert!(matches!(id_def.var_type, ast::Type::NonNull(_)));
    assert!(id_def.default_value.is_none());

    let limit_def = &op.variable_definitions[1];
    assert_eq!(limit_def.variable.name.value, "limit");
    match &limit_def.default_value {
        Some(ast::Value::Int(n)) => assert_eq!(n.value, "10"),
        other => panic!("Expected an Int default, got: {other:?}"),
    }
}

#[test]
fn operation_with_directives() {
    let doc = parse_no_loc("query Q @cached(ttl: 60) { a }");
    let op = first_operation(&doc);
    assert_eq!(op.directives.len(), 1);
    assert_eq!(op.directives[0].name.value, "cached");
    assert_eq!(op.directives[0].arguments[0].name.value, "ttl");
}

// =============================================================================
// Fields
// =============================================================================

/// A leading name followed by `:` is the alias; a single name is the
/// field name, never the alias.
#[test]
fn field_alias_and_arguments() {
    let doc = parse_no_loc(r#"{ alias: field(arg: 1, arg2: "s") }"#);
    let field = first_field(&first_operation(&doc).selection_set);

    assert_eq!(field.alias.as_ref().map(|a| a.value.as_ref()), Some("alias"));
    assert_eq!(field.name.value, "field");
    assert_eq!(field.arguments.len(), 2);

    assert_eq!(field.arguments[0].name.value, "arg");
    match &field.arguments[0].value {
        ast::Value::Int(n) => assert_eq!(n.value, "1"),
        other => panic!("Expected an Int value, got: {other:?}"),
    }

    assert_eq!(field.arguments[1].name.value, "arg2");
    match &field.arguments[1].value {
        ast::Value::String(s) => {
            assert_eq!(s.value, "s");
            assert!(!s.block);
        }
        other => panic!("Expected a String value, got: {other:?}"),
    }
}

#[test]
fn field_without_alias() {
    let doc = parse_no_loc("{ name }");
    let field = first_field(&first_operation(&doc).selection_set);
    assert!(field.alias.is_none());
    assert_eq!(field.name.value, "name");
}

#[test]
fn nested_selection_sets() {
    let doc = parse_no_loc("{ hero { friends { name } } }");
    let hero = first_field(&first_operation(&doc).selection_set);
    let friends = first_field(hero.selection_set.as_ref().unwrap());
    let name = first_field(friends.selection_set.as_ref().unwrap());
    assert_eq!(name.name.value, "name");
    assert!(name.selection_set.is_none());
}

// =============================================================================
// Fragments
// =============================================================================

/// `...A` is a spread, `... on T { x }` an inline fragment with a type
/// condition, and `... { y }` an inline fragment without one.
#[test]
fn fragment_spread_vs_inline() {
    let doc = parse_no_loc("{ ...A ... on T { x } ... { y } }");
    let op = first_operation(&doc);
    assert_eq!(op.selection_set.selections.len(), 3);

    match &op.selection_set.selections[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name.value, "A");
        }
        other => panic!("Expected a fragment spread, got: {other:?}"),
    }

    match &op.selection_set.selections[1] {
        ast::Selection::InlineFragment(inline) => {
            let condition = inline.type_condition.as_ref().unwrap();
            assert_eq!(condition.name.value, "T");
            assert_eq!(first_field(&inline.selection_set).name.value, "x");
        }
        other => panic!("Expected an inline fragment, got: {other:?}"),
    }

    match &op.selection_set.selections[2] {
        ast::Selection::InlineFragment(inline) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(first_field(&inline.selection_set).name.value, "y");
        }
        other => panic!("Expected an inline fragment, got: {other:?}"),
    }
}

#[test]
fn fragment_definition() {
    let doc = parse_no_loc(indoc! {"
        fragment UserFields on User @weight(x: 1) {
            id
            name
        }
    "});
    match &doc.definitions[0] {
        ast::Definition::Fragment(fragment) => {
            assert_eq!(fragment.name.value, "UserFields");
            assert_eq!(fragment.type_condition.name.value, "User");
            assert_eq!(fragment.directives.len(), 1);
            assert_eq!(fragment.selection_set.selections.len(), 2);
        }
        other => panic!("Expected a fragment definition, got: {other:?}"),
    }
}

#[test]
fn fragment_spread_with_directive() {
    let doc = parse_no_loc("{ ...A @include(if: $yes) }");
    let op = first_operation(&doc);
    match &op.selection_set.selections[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.directives[0].name.value, "include");
        }
        other => panic!("Expected a fragment spread, got: {other:?}"),
    }
}

// =============================================================================
// Purity
// =============================================================================

/// Two parses of equal input produce structurally equal ASTs.
#[test]
fn parse_is_idempotent() {
    let source = "query Q($v: [Int!] = [1]) @d { a: b(c: {d: ENUM}) { e } }";
    let first = parse(source, ParseOptions::default()).unwrap();
    let second = parse(source, ParseOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mixed_executable_and_type_system_definitions() {
    let doc = parse_no_loc(indoc! {r#"
        query Q { a }

        type User {
            name: String
        }

        fragment F on User { name }
    "#});
    assert_eq!(doc.definitions.len(), 3);
    assert_eq!(doc.executable_definitions().count(), 2);
    assert_eq!(doc.type_system_definitions().count(), 1);
}
