use crate::token::GraphQLToken;
use crate::GraphQLSource;
use serde::ser::SerializeStruct;

/// The source region an AST node was built from.
///
/// Bounds the node by its first and last token. The token endpoints
/// and the source handle are *clones*, not back-references, so the AST
/// stays a pure tree that can outlive the parser (token values still
/// borrow from the source text via the `'src` lifetime).
///
/// The serialized (JSON) form contains only `{start, end}`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLLocation<'src> {
    /// Byte offset of the first character of the node (inclusive).
    pub start: usize,

    /// Byte offset just past the last character of the node
    /// (exclusive).
    pub end: usize,

    /// The first token of the node.
    pub start_token: GraphQLToken<'src>,

    /// The last token of the node.
    pub end_token: GraphQLToken<'src>,

    /// The source the node was parsed from.
    pub source: GraphQLSource<'src>,
}

impl serde::Serialize for GraphQLLocation<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Location", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}
