//! Recursive descent parser for GraphQL documents.
//!
//! This module provides [`GraphQLParser`], which drives a
//! [`GraphQLLexer`] through the GraphQL grammar, one mutually
//! recursive production per non-terminal. All token-stream discipline
//! goes through a small set of combinators (`peek`, `skip`, `expect`,
//! `expect_keyword`, `unexpected`, and the bracketed-list helpers
//! `any` and `many`), which also centralize error message formatting.
//!
//! # Failure semantics
//!
//! There is no recovery and no resynchronization: the first syntax
//! error unwinds out of every production via `Result` and `?`, and the
//! partially built AST is dropped. Every error is a
//! [`GraphQLSyntaxError`] pinned to the byte offset of the first
//! offending token.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLexer;
use crate::GraphQLLocation;
use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use std::borrow::Cow;

type ParseResult<T> = Result<T, GraphQLSyntaxError>;

// =============================================================================
// Entry points
// =============================================================================

/// Parses a GraphQL document.
///
/// Accepts raw text (wrapped in a [`GraphQLSource`] with default name
/// and offset) or a pre-constructed source.
///
/// # Example
///
/// ```
/// use graphql_syntax::parse;
/// use graphql_syntax::ParseOptions;
///
/// let doc = parse("{ hello }", ParseOptions::default()).unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub fn parse<'src>(
    source: impl Into<GraphQLSource<'src>>,
    options: ParseOptions,
) -> ParseResult<ast::Document<'src>> {
    GraphQLParser::new(source, options).parse_document()
}

/// Parses a standalone value literal (e.g. `[1, 2, "three"]`).
///
/// Useful for tools that receive value fragments outside any document,
/// such as `valueFromAST`-style converters and configuration readers.
/// Variables are allowed; use a const context downstream if they are
/// not acceptable.
pub fn parse_value<'src>(
    source: impl Into<GraphQLSource<'src>>,
    options: ParseOptions,
) -> ParseResult<ast::Value<'src>> {
    GraphQLParser::new(source, options).parse_lone_value()
}

/// Parses a standalone type reference (e.g. `[Int!]!`).
pub fn parse_type<'src>(
    source: impl Into<GraphQLSource<'src>>,
    options: ParseOptions,
) -> ParseResult<ast::Type<'src>> {
    GraphQLParser::new(source, options).parse_lone_type()
}

// =============================================================================
// Parser
// =============================================================================

/// A recursive descent parser over a [`GraphQLLexer`] token stream.
pub struct GraphQLParser<'src> {
    lexer: GraphQLLexer<'src>,

    /// Current nesting depth, shared across value literals, selection
    /// sets, and type references. Prevents stack overflow on
    /// adversarial inputs like `[[[[[…`.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum nesting depth for recursive productions.
    ///
    /// Far beyond any realistic document (real-world documents nest
    /// fewer than ~15 levels) while staying safe in debug builds where
    /// un-optimized frames can be several KB each.
    const MAX_RECURSION_DEPTH: usize = 128;

    /// Creates a parser positioned at the synthetic start-of-file
    /// marker.
    pub fn new(
        source: impl Into<GraphQLSource<'src>>,
        options: ParseOptions,
    ) -> Self {
        Self {
            lexer: GraphQLLexer::new(source.into(), options),
            recursion_depth: 0,
        }
    }

    /// Parses a complete document: `SOF Definition+ EOF`.
    pub fn parse_document(mut self) -> ParseResult<ast::Document<'src>> {
        let start = self.lexer.token().clone();
        self.expect(GraphQLTokenKind::Sof)?;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(GraphQLTokenKind::Eof)? {
                break;
            }
        }
        Ok(ast::Document {
            definitions,
            loc: self.loc(&start),
        })
    }

    /// Parses a standalone value literal: `SOF Value EOF`.
    pub fn parse_lone_value(mut self) -> ParseResult<ast::Value<'src>> {
        self.expect(GraphQLTokenKind::Sof)?;
        let value = self.parse_value_value()?;
        self.expect(GraphQLTokenKind::Eof)?;
        Ok(value)
    }

    /// Parses a standalone type reference: `SOF Type EOF`.
    pub fn parse_lone_type(mut self) -> ParseResult<ast::Type<'src>> {
        self.expect(GraphQLTokenKind::Sof)?;
        let type_reference = self.parse_type_reference()?;
        self.expect(GraphQLTokenKind::Eof)?;
        Ok(type_reference)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Checks whether the current token is of the given kind, without
    /// consuming anything.
    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    /// Checks whether the current token is a Name with the given
    /// value, without consuming anything.
    fn peek_keyword(&self, value: &str) -> bool {
        let token = self.lexer.token();
        token.kind == GraphQLTokenKind::Name
            && token.value.as_deref() == Some(value)
    }

    /// If the current token is of the given kind, consumes it and
    /// returns `true`; otherwise leaves the stream untouched and
    /// returns `false`.
    fn skip(&mut self, kind: GraphQLTokenKind) -> ParseResult<bool> {
        if self.peek(kind) {
            self.lexer.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes and returns the current token if it is of the given
    /// kind; raises a syntax error pinned to its start offset
    /// otherwise.
    fn expect(
        &mut self,
        kind: GraphQLTokenKind,
    ) -> ParseResult<GraphQLToken<'src>> {
        let token = self.lexer.token().clone();
        if token.kind == kind {
            self.lexer.advance()?;
            Ok(token)
        } else {
            Err(GraphQLSyntaxError::new(
                self.lexer.source(),
                token.start,
                format!("Expected {kind}, found {token}"),
            ))
        }
    }

    /// Consumes and returns the current token if it is a Name whose
    /// value equals `value`; raises a syntax error otherwise.
    fn expect_keyword(
        &mut self,
        value: &str,
    ) -> ParseResult<GraphQLToken<'src>> {
        let token = self.lexer.token().clone();
        if token.kind == GraphQLTokenKind::Name
            && token.value.as_deref() == Some(value)
        {
            self.lexer.advance()?;
            Ok(token)
        } else {
            Err(GraphQLSyntaxError::new(
                self.lexer.source(),
                token.start,
                format!("Expected \"{value}\", found {token}"),
            ))
        }
    }

    /// Constructs (does not raise) an "Unexpected <token>" error at
    /// the given token, or at the current one when `None`.
    fn unexpected(
        &self,
        token: Option<&GraphQLToken<'src>>,
    ) -> GraphQLSyntaxError {
        let token = match token {
            Some(token) => token,
            None => self.lexer.token(),
        };
        GraphQLSyntaxError::new(
            self.lexer.source(),
            token.start,
            format!("Unexpected {token}"),
        )
    }

    /// Parses a possibly-empty bracketed list:
    /// `open item* close`.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        while !self.skip(close)? {
            nodes.push(parse_item(self)?);
        }
        Ok(nodes)
    }

    /// Parses a non-empty bracketed list:
    /// `open item+ close`.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        let mut nodes = vec![parse_item(self)?];
        while !self.skip(close)? {
            nodes.push(parse_item(self)?);
        }
        Ok(nodes)
    }

    // =========================================================================
    // Location and recursion helpers
    // =========================================================================

    /// Builds a location from a production's start token to the most
    /// recently consumed token. Returns `None` when location emission
    /// is disabled.
    fn loc(
        &self,
        start_token: &GraphQLToken<'src>,
    ) -> Option<GraphQLLocation<'src>> {
        if self.lexer.options().no_location {
            return None;
        }
        let end_token = self.lexer.last_token().clone();
        Some(GraphQLLocation {
            start: start_token.start,
            end: end_token.end,
            start_token: start_token.clone(),
            end_token,
            source: self.lexer.source().clone(),
        })
    }

    /// Bumps the shared nesting depth, failing once the limit is
    /// exceeded. Callers must pair this with `exit_recursion()`.
    fn enter_recursion(&mut self) -> ParseResult<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            return Err(GraphQLSyntaxError::new(
                self.lexer.source(),
                self.lexer.token().start,
                "Maximum nesting depth exceeded",
            ));
        }
        Ok(())
    }

    /// Decrements the shared nesting depth.
    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Returns the value carried by a token, or an empty string for
    /// valueless kinds. Callers only use this on kinds the lexer
    /// always attaches a value to.
    fn token_value(token: &GraphQLToken<'src>) -> Cow<'src, str> {
        token.value.clone().unwrap_or_default()
    }

    // =========================================================================
    // Document productions
    // =========================================================================

    /// Dispatches a top-level definition from the current token.
    fn parse_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        let token = self.lexer.token().clone();
        match token.kind {
            // Operation shorthand: a bare selection set.
            GraphQLTokenKind::BraceOpen => Ok(ast::Definition::Operation(
                self.parse_operation_definition()?,
            )),
            GraphQLTokenKind::Name => match token.value.as_deref() {
                Some("query" | "mutation" | "subscription") => {
                    Ok(ast::Definition::Operation(
                        self.parse_operation_definition()?,
                    ))
                }
                Some("fragment") => Ok(ast::Definition::Fragment(
                    self.parse_fragment_definition()?,
                )),
                Some(
                    "schema" | "scalar" | "type" | "interface" | "union"
                    | "enum" | "input" | "extend" | "directive",
                ) => Ok(ast::Definition::TypeSystem(
                    self.parse_type_system_definition()?,
                )),
                _ => Err(self.unexpected(None)),
            },
            // A description string must introduce a type-system
            // definition.
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString => {
                Ok(ast::Definition::TypeSystem(
                    self.parse_type_system_definition()?,
                ))
            }
            _ => Err(self.unexpected(None)),
        }
    }

    // =========================================================================
    // Operation productions
    // =========================================================================

    /// Parses an operation definition, in either shorthand or full
    /// form.
    fn parse_operation_definition(
        &mut self,
    ) -> ParseResult<ast::OperationDefinition<'src>> {
        let start = self.lexer.token().clone();
        if self.peek(GraphQLTokenKind::BraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: self.loc(&start),
            });
        }
        let operation = self.parse_operation_kind()?;
        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// Parses one of the operation keywords.
    fn parse_operation_kind(&mut self) -> ParseResult<ast::OperationKind> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        token
            .value
            .as_deref()
            .and_then(ast::OperationKind::from_keyword)
            .ok_or_else(|| self.unexpected(Some(&token)))
    }

    /// Parses the parenthesized variable definition list, which is
    /// absent entirely when no parenthesis follows.
    fn parse_variable_definitions(
        &mut self,
    ) -> ParseResult<Vec<ast::VariableDefinition<'src>>> {
        if self.peek(GraphQLTokenKind::ParenOpen) {
            self.many(
                GraphQLTokenKind::ParenOpen,
                Self::parse_variable_definition,
                GraphQLTokenKind::ParenClose,
            )
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses `$name: Type (= constValue)?`.
    fn parse_variable_definition(
        &mut self,
    ) -> ParseResult<ast::VariableDefinition<'src>> {
        let start = self.lexer.token().clone();
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            loc: self.loc(&start),
        })
    }

    /// Parses `$name`.
    fn parse_variable(&mut self) -> ParseResult<ast::Variable<'src>> {
        let start = self.lexer.token().clone();
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            name,
            loc: self.loc(&start),
        })
    }

    /// Parses a name token into a [`Name`](ast::Name) node.
    fn parse_name(&mut self) -> ParseResult<ast::Name<'src>> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(ast::Name {
            value: Self::token_value(&token),
            loc: self.loc(&token),
        })
    }

    // =========================================================================
    // Selection productions
    // =========================================================================

    /// Parses `{ Selection+ }`, guarding against pathological nesting.
    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(
        &mut self,
    ) -> ParseResult<ast::SelectionSet<'src>> {
        let start = self.lexer.token().clone();
        let selections = self.many(
            GraphQLTokenKind::BraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(ast::SelectionSet {
            selections,
            loc: self.loc(&start),
        })
    }

    /// Dispatches a selection: `...` introduces a fragment, anything
    /// else is a field.
    fn parse_selection(&mut self) -> ParseResult<ast::Selection<'src>> {
        if self.peek(GraphQLTokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    /// Parses a field selection. A leading name followed by `:` is the
    /// alias, with the field name following.
    fn parse_field(&mut self) -> ParseResult<ast::Field<'src>> {
        let start = self.lexer.token().clone();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(GraphQLTokenKind::BraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// Parses the parenthesized argument list, absent entirely when no
    /// parenthesis follows.
    fn parse_arguments(&mut self) -> ParseResult<Vec<ast::Argument<'src>>> {
        if self.peek(GraphQLTokenKind::ParenOpen) {
            self.many(
                GraphQLTokenKind::ParenOpen,
                Self::parse_argument,
                GraphQLTokenKind::ParenClose,
            )
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses `name: value`.
    fn parse_argument(&mut self) -> ParseResult<ast::Argument<'src>> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_value()?;
        Ok(ast::Argument {
            name,
            value,
            loc: self.loc(&start),
        })
    }

    // =========================================================================
    // Fragment productions
    // =========================================================================

    /// Parses either a fragment spread or an inline fragment,
    /// beginning at `...`.
    ///
    /// A name after the spread that is not `on` makes it a spread;
    /// otherwise an optional `on NamedType` type condition and a
    /// selection set form an inline fragment.
    fn parse_fragment(&mut self) -> ParseResult<ast::Selection<'src>> {
        let start = self.lexer.token().clone();
        self.expect(GraphQLTokenKind::Spread)?;
        if self.peek(GraphQLTokenKind::Name) && !self.peek_keyword("on") {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives()?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                loc: self.loc(&start),
            }));
        }
        let type_condition = if self.peek_keyword("on") {
            self.lexer.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(&start),
        }))
    }

    /// Parses `fragment Name on NamedType Directives? SelectionSet`.
    fn parse_fragment_definition(
        &mut self,
    ) -> ParseResult<ast::FragmentDefinition<'src>> {
        let start = self.lexer.token().clone();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// Parses a fragment name, rejecting the reserved identifier `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<ast::Name<'src>> {
        if self.peek_keyword("on") {
            return Err(self.unexpected(None));
        }
        self.parse_name()
    }

    // =========================================================================
    // Value productions
    // =========================================================================

    /// Parses a value literal, guarding against pathological nesting.
    ///
    /// `is_const` rejects variable references, for positions like
    /// variable default values.
    fn parse_value_literal(
        &mut self,
        is_const: bool,
    ) -> ParseResult<ast::Value<'src>> {
        self.enter_recursion()?;
        let result = self.parse_value_literal_impl(is_const);
        self.exit_recursion();
        result
    }

    fn parse_value_literal_impl(
        &mut self,
        is_const: bool,
    ) -> ParseResult<ast::Value<'src>> {
        let token = self.lexer.token().clone();
        match token.kind {
            GraphQLTokenKind::BracketOpen => self.parse_list_value(is_const),
            GraphQLTokenKind::BraceOpen => self.parse_object_value(is_const),
            GraphQLTokenKind::Int => {
                self.lexer.advance()?;
                Ok(ast::Value::Int(ast::IntValue {
                    value: Self::token_value(&token),
                    loc: self.loc(&token),
                }))
            }
            GraphQLTokenKind::Float => {
                self.lexer.advance()?;
                Ok(ast::Value::Float(ast::FloatValue {
                    value: Self::token_value(&token),
                    loc: self.loc(&token),
                }))
            }
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString => {
                self.lexer.advance()?;
                Ok(ast::Value::String(ast::StringValue {
                    value: Self::token_value(&token),
                    block: token.kind == GraphQLTokenKind::BlockString,
                    loc: self.loc(&token),
                }))
            }
            GraphQLTokenKind::Name => {
                self.lexer.advance()?;
                match token.value.as_deref() {
                    Some("true") => Ok(ast::Value::Boolean(ast::BooleanValue {
                        value: true,
                        loc: self.loc(&token),
                    })),
                    Some("false") => {
                        Ok(ast::Value::Boolean(ast::BooleanValue {
                            value: false,
                            loc: self.loc(&token),
                        }))
                    }
                    Some("null") => Ok(ast::Value::Null(ast::NullValue {
                        loc: self.loc(&token),
                    })),
                    _ => Ok(ast::Value::Enum(ast::EnumValue {
                        value: Self::token_value(&token),
                        loc: self.loc(&token),
                    })),
                }
            }
            GraphQLTokenKind::Dollar if !is_const => {
                Ok(ast::Value::Variable(self.parse_variable()?))
            }
            _ => Err(self.unexpected(None)),
        }
    }

    /// Parses a value in const context (variables rejected).
    fn parse_const_value(&mut self) -> ParseResult<ast::Value<'src>> {
        self.parse_value_literal(true)
    }

    /// Parses a value in non-const context (variables allowed).
    fn parse_value_value(&mut self) -> ParseResult<ast::Value<'src>> {
        self.parse_value_literal(false)
    }

    /// Parses `[ value* ]`. The empty list `[]` is valid.
    fn parse_list_value(
        &mut self,
        is_const: bool,
    ) -> ParseResult<ast::Value<'src>> {
        let start = self.lexer.token().clone();
        let values = self.any(
            GraphQLTokenKind::BracketOpen,
            |parser| parser.parse_value_literal(is_const),
            GraphQLTokenKind::BracketClose,
        )?;
        Ok(ast::Value::List(ast::ListValue {
            values,
            loc: self.loc(&start),
        }))
    }

    /// Parses `{ (name: value)* }`. The empty form `{}` is valid,
    /// unlike selection sets.
    fn parse_object_value(
        &mut self,
        is_const: bool,
    ) -> ParseResult<ast::Value<'src>> {
        let start = self.lexer.token().clone();
        self.expect(GraphQLTokenKind::BraceOpen)?;
        let mut fields = Vec::new();
        while !self.skip(GraphQLTokenKind::BraceClose)? {
            fields.push(self.parse_object_field(is_const)?);
        }
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            loc: self.loc(&start),
        }))
    }

    /// Parses a single `name: value` entry of an object value.
    fn parse_object_field(
        &mut self,
        is_const: bool,
    ) -> ParseResult<ast::ObjectField<'src>> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::ObjectField {
            name,
            value,
            loc: self.loc(&start),
        })
    }

    // =========================================================================
    // Directive productions
    // =========================================================================

    /// Parses zero or more `@directive` annotations.
    fn parse_directives(&mut self) -> ParseResult<Vec<ast::Directive<'src>>> {
        let mut directives = Vec::new();
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// Parses `@name(args?)`.
    fn parse_directive(&mut self) -> ParseResult<ast::Directive<'src>> {
        let start = self.lexer.token().clone();
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(ast::Directive {
            name,
            arguments,
            loc: self.loc(&start),
        })
    }

    // =========================================================================
    // Type reference productions
    // =========================================================================

    /// Parses a type reference, guarding against pathological nesting.
    fn parse_type_reference(&mut self) -> ParseResult<ast::Type<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(&mut self) -> ParseResult<ast::Type<'src>> {
        let start = self.lexer.token().clone();
        let inner = if self.skip(GraphQLTokenKind::BracketOpen)? {
            let of_type = self.parse_type_reference()?;
            self.expect(GraphQLTokenKind::BracketClose)?;
            ast::Type::List(ast::ListType {
                of_type: Box::new(of_type),
                loc: self.loc(&start),
            })
        } else {
            ast::Type::Named(self.parse_named_type()?)
        };
        if self.skip(GraphQLTokenKind::Bang)? {
            Ok(ast::Type::NonNull(ast::NonNullType {
                of_type: Box::new(inner),
                loc: self.loc(&start),
            }))
        } else {
            Ok(inner)
        }
    }

    /// Parses a bare named type.
    fn parse_named_type(&mut self) -> ParseResult<ast::NamedType<'src>> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            name,
            loc: self.loc(&start),
        })
    }

    // =========================================================================
    // Type-system productions
    // =========================================================================

    /// Dispatches a type-system definition.
    ///
    /// When a description string precedes the definition, the dispatch
    /// keyword is recovered with a one-token lookahead.
    fn parse_type_system_definition(
        &mut self,
    ) -> ParseResult<ast::TypeSystemDefinition<'src>> {
        let keyword = if self.peek_description() {
            self.lexer.lookahead()?.clone()
        } else {
            self.lexer.token().clone()
        };
        if keyword.kind == GraphQLTokenKind::Name {
            match keyword.value.as_deref() {
                Some("schema") => {
                    return Ok(ast::TypeSystemDefinition::Schema(
                        self.parse_schema_definition()?,
                    ));
                }
                Some("scalar") => {
                    return Ok(ast::TypeSystemDefinition::Scalar(
                        self.parse_scalar_type_definition()?,
                    ));
                }
                Some("type") => {
                    return Ok(ast::TypeSystemDefinition::Object(
                        self.parse_object_type_definition()?,
                    ));
                }
                Some("interface") => {
                    return Ok(ast::TypeSystemDefinition::Interface(
                        self.parse_interface_type_definition()?,
                    ));
                }
                Some("union") => {
                    return Ok(ast::TypeSystemDefinition::Union(
                        self.parse_union_type_definition()?,
                    ));
                }
                Some("enum") => {
                    return Ok(ast::TypeSystemDefinition::Enum(
                        self.parse_enum_type_definition()?,
                    ));
                }
                Some("input") => {
                    return Ok(ast::TypeSystemDefinition::InputObject(
                        self.parse_input_object_type_definition()?,
                    ));
                }
                Some("extend") => {
                    return Ok(ast::TypeSystemDefinition::ObjectExtension(
                        self.parse_object_type_extension()?,
                    ));
                }
                Some("directive") => {
                    return Ok(ast::TypeSystemDefinition::Directive(
                        self.parse_directive_definition()?,
                    ));
                }
                _ => {}
            }
        }
        Err(self.unexpected(Some(&keyword)))
    }

    /// Checks whether the current token is a description string.
    fn peek_description(&self) -> bool {
        self.peek(GraphQLTokenKind::String)
            || self.peek(GraphQLTokenKind::BlockString)
    }

    /// Parses the optional description string preceding a type-system
    /// definition.
    fn parse_description(
        &mut self,
    ) -> ParseResult<Option<ast::StringValue<'src>>> {
        if !self.peek_description() {
            return Ok(None);
        }
        let token = self.lexer.token().clone();
        self.lexer.advance()?;
        Ok(Some(ast::StringValue {
            value: Self::token_value(&token),
            block: token.kind == GraphQLTokenKind::BlockString,
            loc: self.loc(&token),
        }))
    }

    /// Parses `schema Directives? { OperationTypeDefinition+ }`.
    fn parse_schema_definition(
        &mut self,
    ) -> ParseResult<ast::SchemaDefinition<'src>> {
        let start = self.lexer.token().clone();
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;
        let operation_types = self.many(
            GraphQLTokenKind::BraceOpen,
            Self::parse_operation_type_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(ast::SchemaDefinition {
            directives,
            operation_types,
            loc: self.loc(&start),
        })
    }

    /// Parses `operation: NamedType`.
    fn parse_operation_type_definition(
        &mut self,
    ) -> ParseResult<ast::OperationTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let operation = self.parse_operation_kind()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation,
            named_type,
            loc: self.loc(&start),
        })
    }

    /// Parses `Description? scalar Name Directives?`.
    fn parse_scalar_type_definition(
        &mut self,
    ) -> ParseResult<ast::ScalarTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(&start),
        })
    }

    /// Parses
    /// `Description? type Name ImplementsInterfaces? Directives?
    /// { FieldDefinition* }`.
    fn parse_object_type_definition(
        &mut self,
    ) -> ParseResult<ast::ObjectTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::BraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// Parses `implements NamedType+`, where the interface names are
    /// separated only by whitespace. Absent entirely when the current
    /// name is not `implements`.
    fn parse_implements_interfaces(
        &mut self,
    ) -> ParseResult<Vec<ast::NamedType<'src>>> {
        let mut interfaces = Vec::new();
        if self.peek_keyword("implements") {
            self.lexer.advance()?;
            loop {
                interfaces.push(self.parse_named_type()?);
                if !self.peek(GraphQLTokenKind::Name) {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    /// Parses
    /// `Description? Name ArgumentDefs? : Type Directives?`.
    fn parse_field_definition(
        &mut self,
    ) -> ParseResult<ast::FieldDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives()?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            loc: self.loc(&start),
        })
    }

    /// Parses the parenthesized input value definition list, absent
    /// entirely when no parenthesis follows.
    fn parse_argument_definitions(
        &mut self,
    ) -> ParseResult<Vec<ast::InputValueDefinition<'src>>> {
        if self.peek(GraphQLTokenKind::ParenOpen) {
            self.many(
                GraphQLTokenKind::ParenOpen,
                Self::parse_input_value_definition,
                GraphQLTokenKind::ParenClose,
            )
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses
    /// `Description? Name : Type (= constValue)? Directives?`.
    fn parse_input_value_definition(
        &mut self,
    ) -> ParseResult<ast::InputValueDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            loc: self.loc(&start),
        })
    }

    /// Parses
    /// `Description? interface Name Directives? { FieldDefinition* }`.
    fn parse_interface_type_definition(
        &mut self,
    ) -> ParseResult<ast::InterfaceTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::BraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// Parses
    /// `Description? union Name Directives? = UnionMembers`.
    fn parse_union_type_definition(
        &mut self,
    ) -> ParseResult<ast::UnionTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        self.expect(GraphQLTokenKind::Equals)?;
        let types = self.parse_union_members()?;
        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(&start),
        })
    }

    /// Parses `|? NamedType (| NamedType)*`: an optional leading pipe,
    /// then one or more pipe-separated member types.
    fn parse_union_members(
        &mut self,
    ) -> ParseResult<Vec<ast::NamedType<'src>>> {
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut members = vec![self.parse_named_type()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            members.push(self.parse_named_type()?);
        }
        Ok(members)
    }

    /// Parses
    /// `Description? enum Name Directives? { EnumValueDefinition+ }`.
    fn parse_enum_type_definition(
        &mut self,
    ) -> ParseResult<ast::EnumTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let values = self.many(
            GraphQLTokenKind::BraceOpen,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(&start),
        })
    }

    /// Parses `Description? Name Directives?`.
    ///
    /// Whether the name is a valid enum value (not `true`, `false`,
    /// or `null`) is a validation concern, not a parse concern.
    fn parse_enum_value_definition(
        &mut self,
    ) -> ParseResult<ast::EnumValueDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(&start),
        })
    }

    /// Parses
    /// `Description? input Name Directives? { InputValueDefinition* }`.
    fn parse_input_object_type_definition(
        &mut self,
    ) -> ParseResult<ast::InputObjectTypeDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::BraceOpen,
            Self::parse_input_value_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// Parses `extend type Name …`.
    ///
    /// Only the object form of extensions is recognized; `extend`
    /// followed by any other keyword is an error at that keyword. An
    /// extension adding neither interfaces, directives, nor fields is
    /// an error as well.
    fn parse_object_type_extension(
        &mut self,
    ) -> ParseResult<ast::ObjectTypeExtension<'src>> {
        let start = self.lexer.token().clone();
        self.expect_keyword("extend")?;
        if !self.peek_keyword("type") {
            return Err(self.unexpected(None));
        }
        self.lexer.advance()?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = if self.peek(GraphQLTokenKind::BraceOpen) {
            self.any(
                GraphQLTokenKind::BraceOpen,
                Self::parse_field_definition,
                GraphQLTokenKind::BraceClose,
            )?
        } else {
            Vec::new()
        };
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty()
        {
            return Err(self.unexpected(None));
        }
        Ok(ast::ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// Parses
    /// `Description? directive @ Name ArgumentDefs? on
    /// DirectiveLocations`.
    fn parse_directive_definition(
        &mut self,
    ) -> ParseResult<ast::DirectiveDefinition<'src>> {
        let start = self.lexer.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
            loc: self.loc(&start),
        })
    }

    /// Parses `|? Name (| Name)*`, the same shape as union members.
    fn parse_directive_locations(
        &mut self,
    ) -> ParseResult<Vec<ast::Name<'src>>> {
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    /// Parses a single directive location name, which must belong to
    /// the closed [`DirectiveLocation`](ast::DirectiveLocation) set.
    fn parse_directive_location(&mut self) -> ParseResult<ast::Name<'src>> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        if ast::DirectiveLocation::from_name(&name.value).is_some() {
            Ok(name)
        } else {
            Err(self.unexpected(Some(&start)))
        }
    }
}
