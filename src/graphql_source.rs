use crate::SourceLocation;
use std::borrow::Cow;

/// An immutable GraphQL source document.
///
/// Bundles the input text with a human-readable name (shown in error
/// messages) and a logical starting offset for sources embedded inside a
/// host file (e.g. a GraphQL string literal inside another document).
///
/// All fields are private with accessor methods. The struct is cheap to
/// clone: the body is a borrowed slice and the name is a [`Cow`] that
/// borrows in the common case.
///
/// # Example
///
/// ```
/// use graphql_syntax::GraphQLSource;
/// use graphql_syntax::SourceLocation;
///
/// let source = GraphQLSource::with_name("{ hello }", "query.graphql")
///     .at_location_offset(SourceLocation::new(10, 3));
/// assert_eq!(source.name(), "query.graphql");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLSource<'src> {
    /// The full input text.
    body: &'src str,

    /// Human-readable name of the document.
    name: Cow<'src, str>,

    /// Position of the document's first character within its host
    /// document. `{line: 1, column: 1}` for standalone sources.
    location_offset: SourceLocation,
}

impl<'src> GraphQLSource<'src> {
    /// Creates a source with the default name `"GraphQL"` and no
    /// location offset.
    pub fn new(body: &'src str) -> Self {
        Self {
            body,
            name: Cow::Borrowed("GraphQL"),
            location_offset: SourceLocation::new(1, 1),
        }
    }

    /// Creates a source with a custom name.
    pub fn with_name(body: &'src str, name: impl Into<Cow<'src, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::new(body)
        }
    }

    /// Sets the logical starting offset of this source within its host
    /// document.
    ///
    /// Both `line` and `column` must be 1-based positive values.
    pub fn at_location_offset(mut self, offset: SourceLocation) -> Self {
        debug_assert!(offset.line >= 1, "location offset line is 1-based");
        debug_assert!(offset.column >= 1, "location offset column is 1-based");
        self.location_offset = offset;
        self
    }

    /// Returns the full input text.
    pub fn body(&self) -> &'src str {
        self.body
    }

    /// Returns the human-readable name of the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the logical starting offset.
    pub fn location_offset(&self) -> SourceLocation {
        self.location_offset
    }
}

impl<'src> From<&'src str> for GraphQLSource<'src> {
    fn from(body: &'src str) -> Self {
        Self::new(body)
    }
}

impl<'src> From<&'src String> for GraphQLSource<'src> {
    fn from(body: &'src String) -> Self {
        Self::new(body)
    }
}
