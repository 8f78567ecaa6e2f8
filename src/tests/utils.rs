//! Shared helpers for parser tests.

use crate::ast;
use crate::parse;
use crate::ParseOptions;

/// Parses `source` with locations disabled, panicking on failure.
///
/// Most structural assertions compare nodes for equality, which is
/// simplest with the `loc` fields absent.
pub fn parse_no_loc(source: &str) -> ast::Document<'_> {
    parse(source, ParseOptions::without_locations())
        .expect("source should parse")
}

/// Parses `source` with locations enabled, panicking on failure.
pub fn parse_with_loc(source: &str) -> ast::Document<'_> {
    parse(source, ParseOptions::default()).expect("source should parse")
}

/// Returns the first definition as an operation definition.
pub fn first_operation<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    match &doc.definitions[0] {
        ast::Definition::Operation(op) => op,
        other => panic!("Expected an operation definition, got: {other:?}"),
    }
}

/// Returns the first definition as a type-system definition.
pub fn first_type_system<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::TypeSystemDefinition<'src> {
    match &doc.definitions[0] {
        ast::Definition::TypeSystem(def) => def,
        other => panic!("Expected a type-system definition, got: {other:?}"),
    }
}

/// Returns the first selection as a field.
pub fn first_field<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
) -> &'a ast::Field<'src> {
    match &selection_set.selections[0] {
        ast::Selection::Field(field) => field,
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}
