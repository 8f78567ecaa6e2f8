use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLLocation;
use inherent::inherent;

// =========================================================
// Type enum
// =========================================================

/// A type reference (e.g. `[Int!]!`).
///
/// The grammar never nests [`NonNullType`] directly inside another
/// `NonNullType`: `!` binds once per named or list type.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

/// A reference to a named type (e.g. `Int`).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A list type wrapper (e.g. `[Int]`).
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub of_type: Box<Type<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A non-null type wrapper (e.g. `Int!`). The inner type is always a
/// named or list type.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub of_type: Box<Type<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// AstNode impls
// =========================================================

#[inherent]
impl<'src> AstNode<'src> for Type<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        match self {
            Type::Named(t) => t.location(),
            Type::List(t) => t.location(),
            Type::NonNull(t) => t.location(),
        }
    }
}

#[inherent]
impl<'src> AstNode<'src> for NamedType<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ListType<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for NonNullType<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}
