use crate::token::GraphQLTokenKind;
use std::borrow::Cow;
use std::fmt;

/// A GraphQL token with its byte range and line/column position.
///
/// Tokens are produced in strictly increasing `start` order by the
/// lexer. `start`/`end` form the half-open byte interval
/// `[start, end)` within the source body; `line`/`column` are the
/// 1-based position of the token's first character (the synthetic
/// [`Sof`](GraphQLTokenKind::Sof) marker sits at line 0, column 0).
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `value` borrows
/// directly from the source text whenever decoding did not change it
/// (names, numbers, escape-free strings), and owns the decoded string
/// otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token.
    pub kind: GraphQLTokenKind,

    /// Byte offset of the token's first character (inclusive).
    pub start: usize,

    /// Byte offset just past the token's last character (exclusive).
    pub end: usize,

    /// 1-based line of the token's first character.
    pub line: usize,

    /// 1-based character column of the token's first character.
    pub column: usize,

    /// The decoded token value, present exactly when
    /// [`kind.has_value()`](GraphQLTokenKind::has_value): identifier
    /// text for names, verbatim source text for numbers, decoded
    /// content for strings, the text after `#` for comments.
    pub value: Option<Cow<'src, str>>,
}

impl<'src> GraphQLToken<'src> {
    /// Creates a token with no value.
    pub fn new(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value: None,
        }
    }

    /// Creates a token carrying a value.
    pub fn with_value(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        value: Cow<'src, str>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value: Some(value),
        }
    }

    /// The synthetic start-of-file marker that begins every token
    /// stream.
    pub fn start_of_file() -> Self {
        Self::new(GraphQLTokenKind::Sof, 0, 0, 0, 0)
    }
}

/// Renders the token for error messages: `Name "foo"` for tokens with
/// a value, the bare kind otherwise.
impl fmt::Display for GraphQLToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{value}\"", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
