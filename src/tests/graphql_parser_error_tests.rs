//! Tests for syntax error behavior: messages, offsets, and the
//! no-recovery contract.

use crate::parse;
use crate::parse_value;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use crate::SourceLocation;

fn parse_err(source: &str) -> GraphQLSyntaxError {
    parse(source, ParseOptions::default())
        .expect_err("source should fail to parse")
}

// =============================================================================
// Dispatch errors
// =============================================================================

/// An empty document fails at offset 0: a document requires at least
/// one definition.
#[test]
fn empty_input_fails_at_offset_zero() {
    let error = parse_err("");
    assert_eq!(error.position(), 0);
    assert_eq!(error.message(), "Unexpected <EOF>");
    assert_eq!(error.location(), SourceLocation::new(1, 1));
}

#[test]
fn whitespace_only_input_fails() {
    let error = parse_err("   \n  ");
    assert_eq!(error.message(), "Unexpected <EOF>");
}

#[test]
fn unknown_top_level_keyword() {
    let error = parse_err("notanoperation Foo { field }");
    assert_eq!(error.message(), "Unexpected Name \"notanoperation\"");
    assert_eq!(error.position(), 0);
}

#[test]
fn stray_punctuator_at_top_level() {
    let error = parse_err("...");
    assert_eq!(error.message(), "Unexpected ...");
}

// =============================================================================
// Expectation errors
// =============================================================================

#[test]
fn missing_closing_brace_reports_expected_name() {
    let error = parse_err("{");
    assert_eq!(error.message(), "Expected Name, found <EOF>");
    assert_eq!(error.position(), 1);
}

#[test]
fn missing_colon_in_argument() {
    let error = parse_err("{ field(arg 1) }");
    assert_eq!(error.message(), "Expected :, found Int \"1\"");
    assert_eq!(error.position(), 12);
}

#[test]
fn missing_on_keyword_in_fragment() {
    let error = parse_err("fragment F upon User { name }");
    assert_eq!(error.message(), "Expected \"on\", found Name \"upon\"");
}

// =============================================================================
// Const contexts
// =============================================================================

/// Variable default values are const: a variable reference inside one
/// is an error pinned to the `$`.
#[test]
fn variable_in_default_value_rejected() {
    let source = "query Q($x: Int = $y) { f }";
    let error = parse_err(source);
    assert_eq!(error.message(), "Unexpected $");
    assert_eq!(error.position(), source.find("$y").unwrap());
}

/// The same literal parses fine as a standalone (non-const) value.
#[test]
fn standalone_value_allows_variables() {
    assert!(parse_value("$x", ParseOptions::default()).is_ok());
}

#[test]
fn variable_in_input_field_default_rejected() {
    let source = "input I { x: Int = $v }";
    let error = parse_err(source);
    assert_eq!(error.message(), "Unexpected $");
    assert_eq!(error.position(), source.find("$v").unwrap());
}

// =============================================================================
// Reserved fragment name
// =============================================================================

#[test]
fn fragment_named_on_rejected() {
    let error = parse_err("fragment on on User { name }");
    assert_eq!(error.message(), "Unexpected Name \"on\"");
    assert_eq!(error.position(), "fragment ".len());
}

#[test]
fn fragment_spread_named_on_is_inline_fragment_error() {
    // `...on` reads as an inline fragment's type condition, so the
    // missing selection set is the reported error.
    let error = parse_err("{ ...on }");
    assert_eq!(error.message(), "Expected Name, found }");
}

// =============================================================================
// Type-system errors
// =============================================================================

/// Only `extend type` is recognized; the other extension forms are
/// unexpected at the keyword after `extend`.
#[test]
fn extend_scalar_rejected() {
    let source = "extend scalar DateTime @foo";
    let error = parse_err(source);
    assert_eq!(error.message(), "Unexpected Name \"scalar\"");
    assert_eq!(error.position(), source.find("scalar").unwrap());
}

/// An extension must add at least one of interfaces, directives, or
/// fields.
#[test]
fn empty_object_extension_rejected() {
    let error = parse_err("extend type User");
    assert_eq!(error.message(), "Unexpected <EOF>");
}

#[test]
fn unknown_directive_location_rejected() {
    let source = "directive @d on FIELD | SIDEWAYS";
    let error = parse_err(source);
    assert_eq!(error.message(), "Unexpected Name \"SIDEWAYS\"");
    assert_eq!(error.position(), source.find("SIDEWAYS").unwrap());
}

/// A description string must be followed by a type-system keyword.
#[test]
fn description_before_query_rejected() {
    let error = parse_err("\"doc\" query Q { a }");
    assert_eq!(error.message(), "Unexpected Name \"query\"");
}

/// An empty selection set is not valid: selection sets require at
/// least one selection.
#[test]
fn empty_selection_set_rejected() {
    let error = parse_err("{ a { } }");
    assert_eq!(error.message(), "Expected Name, found }");
}

// =============================================================================
// Resource guards
// =============================================================================

/// Pathologically nested values fail with a depth error instead of
/// exhausting the stack.
#[test]
fn deeply_nested_value_hits_depth_limit() {
    let source = "[".repeat(2000);
    let error = parse_value(&source, ParseOptions::default())
        .expect_err("nesting should exceed the depth limit");
    assert_eq!(error.message(), "Maximum nesting depth exceeded");
}

// =============================================================================
// Error rendering
// =============================================================================

/// The rendered diagnostic names the source, pins the line/column,
/// and carets the offending column of the source excerpt.
#[test]
fn formatted_error_includes_excerpt_and_caret() {
    let source = GraphQLSource::with_name("{\n  field(arg:\n}", "query.graphql");
    let error = parse(source, ParseOptions::default())
        .expect_err("source should fail to parse");
    assert_eq!(error.source_name(), "query.graphql");
    assert_eq!(error.location(), SourceLocation::new(3, 1));

    let rendered = error.to_string();
    assert!(rendered.starts_with("Syntax Error: Unexpected }"));
    assert!(rendered.contains("--> query.graphql:3:1"));
    assert!(rendered.contains(" 3 | }"));
    assert!(rendered.contains("| ^"));
}

/// A source's location offset shifts reported positions into the host
/// document's coordinates.
#[test]
fn location_offset_shifts_error_coordinates() {
    let source = GraphQLSource::new("{ x ?")
        .at_location_offset(SourceLocation::new(10, 5));
    let error = parse(source, ParseOptions::default())
        .expect_err("source should fail to parse");
    // Raw position is line 1 column 5; the offset shifts both.
    assert_eq!(error.location(), SourceLocation::new(10, 9));
}

/// Errors on later lines shift only the line, not the column.
#[test]
fn location_offset_leaves_later_columns_unshifted() {
    let source = GraphQLSource::new("{\n x ?\n}")
        .at_location_offset(SourceLocation::new(10, 5));
    let error = parse(source, ParseOptions::default())
        .expect_err("source should fail to parse");
    assert_eq!(error.location(), SourceLocation::new(11, 4));
}
