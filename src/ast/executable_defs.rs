use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::GraphQLLocation;
use inherent::inherent;

// =========================================================
// Operation definitions
// =========================================================

/// The kind of a GraphQL operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The source keyword for this operation kind.
    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Resolves a source keyword to an operation kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

/// An operation definition (query, mutation, or subscription).
///
/// The shorthand form (a bare selection set) parses as an anonymous
/// query: `operation` is [`OperationKind::Query`], `name` is `None`,
/// and the variable and directive lists are empty.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A variable definition within an operation's variable list
/// (e.g. `$id: ID! = 4`).
///
/// The default value, when present, is a const value: variable
/// references inside it are a syntax error.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub var_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Selections
// =========================================================

/// A brace-delimited, non-empty list of selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A single entry in a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A field selection, optionally aliased, with arguments, directives,
/// and a nested selection set.
///
/// `alias` is `None` when no alias is present: a single name is the
/// field name, never the alias.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A named argument (e.g. `first: 10`).
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Fragments
// =========================================================

/// A named fragment spread (e.g. `...UserFields`).
///
/// The name is never the identifier `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An inline fragment (e.g. `... on User { name }`), with an optional
/// type condition.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A named fragment definition
/// (e.g. `fragment UserFields on User { name }`).
///
/// The name is never the identifier `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Directives
// =========================================================

/// An `@name(args?)` annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// AstNode impls
// =========================================================

#[inherent]
impl<'src> AstNode<'src> for OperationDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for VariableDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for SelectionSet<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for Selection<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        match self {
            Selection::Field(s) => s.location(),
            Selection::FragmentSpread(s) => s.location(),
            Selection::InlineFragment(s) => s.location(),
        }
    }
}

#[inherent]
impl<'src> AstNode<'src> for Field<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for Argument<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for FragmentSpread<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for InlineFragment<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for FragmentDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for Directive<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}
