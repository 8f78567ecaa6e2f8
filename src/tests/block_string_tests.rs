//! Tests for the block string value algorithm.

use crate::block_string_value;
use std::borrow::Cow;

#[test]
fn removes_uniform_indentation() {
    let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.";
    assert_eq!(
        block_string_value(raw),
        "Hello,\n  World!\n\nYours,\n  GraphQL.",
    );
}

#[test]
fn removes_empty_leading_and_trailing_lines() {
    let raw = "\n\n    Hello,\n      World!\n\n    Yours.\n\n";
    assert_eq!(block_string_value(raw), "Hello,\n  World!\n\nYours.");
}

#[test]
fn removes_blank_leading_and_trailing_lines() {
    let raw = "  \n \n    Hello\n  \n ";
    assert_eq!(block_string_value(raw), "Hello");
}

/// The first line keeps its indentation: it sits on the same line as
/// the opening quotes, so its leading whitespace is intentional.
#[test]
fn retains_indentation_of_first_line() {
    let raw = "    Hello,\n      World!";
    assert_eq!(block_string_value(raw), "    Hello,\nWorld!");
}

#[test]
fn does_not_alter_trailing_spaces() {
    let raw = "\n    Hello,     \n      World!   ";
    assert_eq!(block_string_value(raw), "Hello,     \n  World!   ");
}

#[test]
fn single_line_is_unchanged_and_borrowed() {
    match block_string_value("just one line") {
        Cow::Borrowed(value) => assert_eq!(value, "just one line"),
        other => panic!("Expected a borrowed value, got: {other:?}"),
    }
}

#[test]
fn all_blank_input_collapses_to_empty() {
    assert_eq!(block_string_value(""), "");
    assert_eq!(block_string_value("  \n\t\n   "), "");
}

#[test]
fn treats_carriage_returns_as_line_breaks() {
    let raw = "\r\n  a\r  b\r\n";
    assert_eq!(block_string_value(raw), "a\nb");
}
