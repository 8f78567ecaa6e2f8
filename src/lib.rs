//! A parser for the GraphQL query and schema-definition language.
//!
//! Given a textual source, the parser produces a typed abstract syntax
//! tree with precise source locations, suitable for downstream
//! validation, execution, schema construction, and tooling. It
//! enforces grammatical well-formedness only: semantic rules (fragment
//! resolution, directive placement, enum name validity, …) belong to
//! downstream consumers.
//!
//! # Entry points
//!
//! - [`parse`] — a whole document
//! - [`parse_value`] — a standalone value literal
//! - [`parse_type`] — a standalone type reference
//!
//! Each accepts raw text or a pre-constructed [`GraphQLSource`] plus a
//! [`ParseOptions`] record, and fails with a [`GraphQLSyntaxError`] on
//! the first offending token.
//!
//! # Example
//!
//! ```
//! use graphql_syntax::ast;
//! use graphql_syntax::parse;
//! use graphql_syntax::ParseOptions;
//!
//! let doc = parse("{ hero { name } }", ParseOptions::default()).unwrap();
//! assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
//! ```

pub mod ast;
mod block_string;
mod graphql_lexer;
mod graphql_location;
mod graphql_parser;
mod graphql_source;
mod graphql_syntax_error;
mod parse_options;
mod source_location;
pub mod token;

pub use block_string::block_string_value;
pub use graphql_lexer::GraphQLLexer;
pub use graphql_location::GraphQLLocation;
pub use graphql_parser::parse;
pub use graphql_parser::parse_type;
pub use graphql_parser::parse_value;
pub use graphql_parser::GraphQLParser;
pub use graphql_source::GraphQLSource;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use parse_options::ParseOptions;
pub use source_location::SourceLocation;

#[cfg(test)]
mod tests;
