use std::fmt;

/// The kind of a GraphQL token.
///
/// This is the closed set of lexical units defined by the GraphQL
/// grammar, plus the two synthetic markers `Sof` and `Eof` that bound
/// the token stream.
///
/// Token values live on [`GraphQLToken`](crate::token::GraphQLToken)
/// rather than on the kind, so kinds stay `Copy` and compare with plain
/// `==` in the parser's token-expectation helpers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLTokenKind {
    /// Synthetic start-of-file marker. Always the parser's first token.
    Sof,
    /// Synthetic end-of-file marker.
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,
    /// A name/identifier. The token value holds the identifier text.
    Name,
    /// An integer literal. The token value holds the verbatim source
    /// text, including any leading `-`.
    Int,
    /// A float literal. The token value holds the verbatim source text.
    Float,
    /// A `"…"` string literal. The token value holds the decoded
    /// content with escape sequences resolved.
    String,
    /// A `"""…"""` block string literal. The token value holds the
    /// content after indentation stripping.
    BlockString,
    /// A `#` comment. The token value holds the text after the `#`.
    Comment,
}

impl GraphQLTokenKind {
    /// Whether tokens of this kind carry a decoded `value`.
    pub fn has_value(self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::Name
                | GraphQLTokenKind::Int
                | GraphQLTokenKind::Float
                | GraphQLTokenKind::String
                | GraphQLTokenKind::BlockString
                | GraphQLTokenKind::Comment
        )
    }
}

impl fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = match self {
            GraphQLTokenKind::Sof => "<SOF>",
            GraphQLTokenKind::Eof => "<EOF>",
            GraphQLTokenKind::Bang => "!",
            GraphQLTokenKind::Dollar => "$",
            GraphQLTokenKind::ParenOpen => "(",
            GraphQLTokenKind::ParenClose => ")",
            GraphQLTokenKind::Spread => "...",
            GraphQLTokenKind::Colon => ":",
            GraphQLTokenKind::Equals => "=",
            GraphQLTokenKind::At => "@",
            GraphQLTokenKind::BracketOpen => "[",
            GraphQLTokenKind::BracketClose => "]",
            GraphQLTokenKind::BraceOpen => "{",
            GraphQLTokenKind::Pipe => "|",
            GraphQLTokenKind::BraceClose => "}",
            GraphQLTokenKind::Name => "Name",
            GraphQLTokenKind::Int => "Int",
            GraphQLTokenKind::Float => "Float",
            GraphQLTokenKind::String => "String",
            GraphQLTokenKind::BlockString => "BlockString",
            GraphQLTokenKind::Comment => "Comment",
        };
        f.write_str(display)
    }
}
