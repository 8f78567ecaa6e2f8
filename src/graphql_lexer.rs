//! Streaming lexer over a [`GraphQLSource`] body.
//!
//! Produces [`GraphQLToken`]s on demand with single-token lookahead.
//! Comments are lexed as tokens but skipped by [`advance`] and
//! [`lookahead`], so the parser never sees them.
//!
//! [`advance`]: GraphQLLexer::advance
//! [`lookahead`]: GraphQLLexer::lookahead

use crate::block_string::block_string_value;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use std::borrow::Cow;

/// A hand-rolled lexer for GraphQL source text.
///
/// The lexer holds the current token (initially the synthetic
/// [`Sof`](GraphQLTokenKind::Sof) marker) and the most recently
/// consumed one, which the parser uses to bound node locations. Tokens
/// are lexed lazily: each [`advance()`](GraphQLLexer::advance) scans
/// just far enough to produce the next non-comment token.
///
/// Lexing failures (unterminated strings, malformed numbers, stray
/// characters) raise [`GraphQLSyntaxError`] directly — the first error
/// aborts, matching the parser's no-recovery contract.
pub struct GraphQLLexer<'src> {
    source: GraphQLSource<'src>,
    options: ParseOptions,

    /// The current (not yet consumed) token.
    token: GraphQLToken<'src>,

    /// The most recently consumed token.
    last_token: GraphQLToken<'src>,

    /// Single-token lookahead buffer, filled by `lookahead()` and
    /// drained by the next `advance()`.
    buffered: Option<GraphQLToken<'src>>,

    /// Current byte offset into the source body.
    pos: usize,

    /// Current 1-based line number.
    line: usize,

    /// Byte offset where the current line begins. Token columns are
    /// derived by counting characters from here.
    line_start: usize,
}

impl<'src> GraphQLLexer<'src> {
    /// Creates a lexer positioned at the synthetic start-of-file
    /// marker.
    pub fn new(source: GraphQLSource<'src>, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            token: GraphQLToken::start_of_file(),
            last_token: GraphQLToken::start_of_file(),
            buffered: None,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Returns the originating source.
    pub fn source(&self) -> &GraphQLSource<'src> {
        &self.source
    }

    /// Returns the options this lexer (and its parser) was created
    /// with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Returns the current token.
    pub fn token(&self) -> &GraphQLToken<'src> {
        &self.token
    }

    /// Returns the most recently consumed token.
    pub fn last_token(&self) -> &GraphQLToken<'src> {
        &self.last_token
    }

    /// Consumes the current token and moves to the next one, skipping
    /// comments. Returns the new current token.
    ///
    /// Advancing past [`Eof`](GraphQLTokenKind::Eof) keeps producing
    /// `Eof` tokens.
    pub fn advance(&mut self) -> Result<&GraphQLToken<'src>, GraphQLSyntaxError> {
        let next = match self.buffered.take() {
            Some(token) => token,
            None => self.read_next()?,
        };
        self.last_token = std::mem::replace(&mut self.token, next);
        Ok(&self.token)
    }

    /// Returns the token one step past the current one without
    /// consuming anything. Skips comments, like `advance()`.
    pub fn lookahead(&mut self) -> Result<&GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.buffered.is_none() {
            self.buffered = Some(self.read_next()?);
        }
        Ok(self.buffered.as_ref().expect("lookahead buffer just filled"))
    }

    /// Reads the next non-comment token.
    fn read_next(&mut self) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        loop {
            let token = self.read_token()?;
            if token.kind != GraphQLTokenKind::Comment {
                return Ok(token);
            }
        }
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source.body()[self.pos..]
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character, updating line tracking.
    ///
    /// `\r\n` is consumed as a single newline.
    fn consume_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.line_start = self.pos;
            }
            '\r' => {
                if self.peek_char() == Some('\n') {
                    self.pos += 1;
                }
                self.line += 1;
                self.line_start = self.pos;
            }
            _ => {}
        }
        Some(ch)
    }

    /// Returns the 1-based character column of a byte offset on the
    /// current line.
    fn column_at(&self, offset: usize) -> usize {
        self.source.body()[self.line_start..offset].chars().count() + 1
    }

    /// Constructs a syntax error pinned to `position`.
    fn syntax_error(
        &self,
        position: usize,
        message: impl Into<String>,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(&self.source, position, message)
    }

    // =========================================================================
    // Token scanning
    // =========================================================================

    /// Reads a single raw token, including comments.
    ///
    /// Exposed within the crate so tests can observe comment tokens,
    /// which `advance()`/`lookahead()` skip.
    pub(crate) fn read_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        self.skip_ignored();

        let start = self.pos;
        let line = self.line;
        let column = self.column_at(start);

        let Some(ch) = self.peek_char() else {
            return Ok(GraphQLToken::new(
                GraphQLTokenKind::Eof,
                start,
                start,
                line,
                column,
            ));
        };

        match ch {
            '!' => Ok(self.punctuator(GraphQLTokenKind::Bang, start, line, column)),
            '$' => Ok(self.punctuator(GraphQLTokenKind::Dollar, start, line, column)),
            '(' => Ok(self.punctuator(GraphQLTokenKind::ParenOpen, start, line, column)),
            ')' => Ok(self.punctuator(GraphQLTokenKind::ParenClose, start, line, column)),
            ':' => Ok(self.punctuator(GraphQLTokenKind::Colon, start, line, column)),
            '=' => Ok(self.punctuator(GraphQLTokenKind::Equals, start, line, column)),
            '@' => Ok(self.punctuator(GraphQLTokenKind::At, start, line, column)),
            '[' => Ok(self.punctuator(GraphQLTokenKind::BracketOpen, start, line, column)),
            ']' => Ok(self.punctuator(GraphQLTokenKind::BracketClose, start, line, column)),
            '{' => Ok(self.punctuator(GraphQLTokenKind::BraceOpen, start, line, column)),
            '|' => Ok(self.punctuator(GraphQLTokenKind::Pipe, start, line, column)),
            '}' => Ok(self.punctuator(GraphQLTokenKind::BraceClose, start, line, column)),
            '.' => self.read_spread(start, line, column),
            '#' => Ok(self.read_comment(start, line, column)),
            '"' => {
                if self.remaining().starts_with("\"\"\"") {
                    self.read_block_string(start, line, column)
                } else {
                    self.read_string(start, line, column)
                }
            }
            c if is_name_start(c) => Ok(self.read_name(start, line, column)),
            c if c == '-' || c.is_ascii_digit() => self.read_number(start, line, column),
            c => Err(self.syntax_error(start, format!("Unexpected character `{c}`"))),
        }
    }

    /// Skips ignored source characters: whitespace, line terminators,
    /// commas, and the Unicode BOM.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume_char();
                }
                _ => break,
            }
        }
    }

    /// Consumes a single-character punctuator.
    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind,
        start: usize,
        line: usize,
        column: usize,
    ) -> GraphQLToken<'src> {
        self.consume_char();
        GraphQLToken::new(kind, start, self.pos, line, column)
    }

    /// Reads the `...` spread punctuator. Anything short of three
    /// adjacent dots is an error.
    fn read_spread(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.remaining().starts_with("...") {
            self.consume_char();
            self.consume_char();
            self.consume_char();
            Ok(GraphQLToken::new(
                GraphQLTokenKind::Spread,
                start,
                self.pos,
                line,
                column,
            ))
        } else {
            Err(self.syntax_error(start, "Unexpected character `.`"))
        }
    }

    /// Reads a `#` comment running to the end of the line. The line
    /// terminator is not part of the token.
    fn read_comment(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> GraphQLToken<'src> {
        self.consume_char();
        let content_start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.consume_char();
        }
        let value = &self.source.body()[content_start..self.pos];
        GraphQLToken::with_value(
            GraphQLTokenKind::Comment,
            start,
            self.pos,
            line,
            column,
            Cow::Borrowed(value),
        )
    }

    /// Reads a name: `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn read_name(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> GraphQLToken<'src> {
        self.consume_char();
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.consume_char();
            } else {
                break;
            }
        }
        let value = &self.source.body()[start..self.pos];
        GraphQLToken::with_value(
            GraphQLTokenKind::Name,
            start,
            self.pos,
            line,
            column,
            Cow::Borrowed(value),
        )
    }

    /// Reads an integer or float literal. The token value is the
    /// verbatim source text; no numeric conversion happens here.
    fn read_number(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume_char();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume_char();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit()
                {
                    return Err(self.syntax_error(
                        self.pos,
                        "Invalid number: leading zeros are not allowed",
                    ));
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
            }
            found => {
                return Err(self.digit_expected(self.pos, found));
            }
        }

        if self.peek_char() == Some('.') {
            // `1.foo` and `1..2` are errors; only a digit may follow.
            is_float = true;
            self.consume_char();
            match self.peek_char() {
                Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
                found => return Err(self.digit_expected(self.pos, found)),
            }
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E')
        {
            is_float = true;
            self.consume_char();
            if let Some(sign) = self.peek_char()
                && (sign == '+' || sign == '-')
            {
                self.consume_char();
            }
            match self.peek_char() {
                Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
                found => return Err(self.digit_expected(self.pos, found)),
            }
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        let value = &self.source.body()[start..self.pos];
        Ok(GraphQLToken::with_value(
            kind,
            start,
            self.pos,
            line,
            column,
            Cow::Borrowed(value),
        ))
    }

    /// Consumes a run of ASCII digits.
    fn consume_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.consume_char();
            } else {
                break;
            }
        }
    }

    /// Error for a missing digit in a numeric literal.
    fn digit_expected(
        &self,
        position: usize,
        found: Option<char>,
    ) -> GraphQLSyntaxError {
        let found = match found {
            Some(ch) => format!("`{ch}`"),
            None => "end of input".to_string(),
        };
        self.syntax_error(
            position,
            format!("Invalid number: expected a digit but found {found}"),
        )
    }

    /// Reads a `"…"` string literal, resolving escape sequences.
    ///
    /// The token value borrows from the source when the string contains
    /// no escapes, and owns the decoded text otherwise.
    fn read_string(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        self.consume_char();
        let mut decoded: Option<String> = None;
        let mut chunk_start = self.pos;

        loop {
            match self.peek_char() {
                None => {
                    return Err(self.syntax_error(self.pos, "Unterminated string literal"));
                }
                Some('\n') | Some('\r') => {
                    return Err(self.syntax_error(self.pos, "Unterminated string literal"));
                }
                Some('"') => {
                    let chunk = &self.source.body()[chunk_start..self.pos];
                    self.consume_char();
                    let value = match decoded {
                        None => Cow::Borrowed(chunk),
                        Some(mut s) => {
                            s.push_str(chunk);
                            Cow::Owned(s)
                        }
                    };
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::String,
                        start,
                        self.pos,
                        line,
                        column,
                        value,
                    ));
                }
                Some('\\') => {
                    let escape_start = self.pos;
                    let mut s = decoded.take().unwrap_or_default();
                    s.push_str(&self.source.body()[chunk_start..escape_start]);
                    self.consume_char();
                    s.push(self.read_escaped_char(escape_start)?);
                    decoded = Some(s);
                    chunk_start = self.pos;
                }
                Some(ch) if (ch as u32) < 0x20 && ch != '\t' => {
                    return Err(self.syntax_error(
                        self.pos,
                        format!(
                            "Invalid character within string literal `\\u{:04X}`",
                            ch as u32,
                        ),
                    ));
                }
                Some(_) => {
                    self.consume_char();
                }
            }
        }
    }

    /// Decodes the escape sequence following a consumed backslash.
    fn read_escaped_char(
        &mut self,
        escape_start: usize,
    ) -> Result<char, GraphQLSyntaxError> {
        let Some(escaped) = self.consume_char() else {
            return Err(self.syntax_error(escape_start, "Unterminated string literal"));
        };
        match escaped {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => {
                let hex_start = self.pos;
                for _ in 0..4 {
                    match self.peek_char() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            self.consume_char();
                        }
                        _ => {
                            return Err(self.invalid_escape(escape_start));
                        }
                    }
                }
                let hex = &self.source.body()[hex_start..self.pos];
                let code = u32::from_str_radix(hex, 16)
                    .ok()
                    .and_then(char::from_u32);
                code.ok_or_else(|| self.invalid_escape(escape_start))
            }
            _ => Err(self.invalid_escape(escape_start)),
        }
    }

    /// Error for a malformed escape sequence starting at
    /// `escape_start`.
    fn invalid_escape(&self, escape_start: usize) -> GraphQLSyntaxError {
        let sequence = &self.source.body()[escape_start..self.pos];
        self.syntax_error(
            escape_start,
            format!("Invalid escape sequence `{sequence}`"),
        )
    }

    /// Reads a `"""…"""` block string literal.
    ///
    /// `\"""` is the only recognized escape; the raw content is then
    /// post-processed by [`block_string_value`].
    fn read_block_string(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        self.consume_char();
        self.consume_char();
        self.consume_char();
        let mut unescaped: Option<String> = None;
        let mut chunk_start = self.pos;

        loop {
            if self.remaining().starts_with("\"\"\"") {
                let chunk = &self.source.body()[chunk_start..self.pos];
                self.consume_char();
                self.consume_char();
                self.consume_char();
                let raw = match unescaped {
                    None => Cow::Borrowed(chunk),
                    Some(mut s) => {
                        s.push_str(chunk);
                        Cow::Owned(s)
                    }
                };
                let value = match raw {
                    Cow::Borrowed(s) => block_string_value(s),
                    Cow::Owned(s) => Cow::Owned(block_string_value(&s).into_owned()),
                };
                return Ok(GraphQLToken::with_value(
                    GraphQLTokenKind::BlockString,
                    start,
                    self.pos,
                    line,
                    column,
                    value,
                ));
            }
            match self.peek_char() {
                None => {
                    return Err(self.syntax_error(self.pos, "Unterminated block string"));
                }
                Some('\\') if self.remaining().starts_with("\\\"\"\"") => {
                    let mut s = unescaped.take().unwrap_or_default();
                    s.push_str(&self.source.body()[chunk_start..self.pos]);
                    s.push_str("\"\"\"");
                    unescaped = Some(s);
                    for _ in 0..4 {
                        self.consume_char();
                    }
                    chunk_start = self.pos;
                }
                Some(_) => {
                    self.consume_char();
                }
            }
        }
    }
}

/// Returns `true` if `ch` can start a GraphQL name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
