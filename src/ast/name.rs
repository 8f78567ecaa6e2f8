use crate::ast::AstNode;
use crate::GraphQLLocation;
use inherent::inherent;
use std::borrow::Cow;

/// A GraphQL name (identifier).
///
/// Names are used for type names, field names, argument names,
/// directive names, enum values, and more. The `value` field borrows
/// from the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub loc: Option<GraphQLLocation<'src>>,
}

#[inherent]
impl<'src> AstNode<'src> for Name<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}
