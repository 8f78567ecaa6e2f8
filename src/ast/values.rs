use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLLocation;
use inherent::inherent;
use std::borrow::Cow;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value literal or variable reference.
///
/// Const contexts (variable default values) reject the
/// [`Variable`] variant at parse time; everywhere else all nine
/// variants can appear.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue<'src>),
    Null(NullValue<'src>),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

// =========================================================
// Variable reference
// =========================================================

/// A variable reference in a value position (e.g. `$id`).
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub name: Name<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Scalar values
// =========================================================

/// An integer literal.
///
/// `value` is the verbatim source text (e.g. `"-123"`); no numeric
/// coercion happens during parsing, so precision is preserved for
/// downstream consumers to interpret.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub value: Cow<'src, str>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A float literal.
///
/// `value` is the verbatim source text (e.g. `"-1.23e-4"`).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub value: Cow<'src, str>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A string literal, in either `"…"` or `"""…"""` form.
///
/// `value` holds the decoded content (escape sequences resolved for
/// quoted strings, indentation stripped for block strings). `block`
/// distinguishes the two source forms.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    pub block: bool,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A `true` or `false` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'src> {
    pub value: bool,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A `null` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'src> {
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An enum value: an unquoted name that is not `true`, `false`, or
/// `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Composite values
// =========================================================

/// A list value (e.g. `[1, 2, 3]`). May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An input object value (e.g. `{x: 1, y: 2}`). May be empty, unlike
/// selection sets.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A single `name: value` entry within an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// AstNode impls
// =========================================================

#[inherent]
impl<'src> AstNode<'src> for Value<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        match self {
            Value::Variable(v) => v.location(),
            Value::Int(v) => v.location(),
            Value::Float(v) => v.location(),
            Value::String(v) => v.location(),
            Value::Boolean(v) => v.location(),
            Value::Null(v) => v.location(),
            Value::Enum(v) => v.location(),
            Value::List(v) => v.location(),
            Value::Object(v) => v.location(),
        }
    }
}

#[inherent]
impl<'src> AstNode<'src> for Variable<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for IntValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for FloatValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for StringValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for BooleanValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for NullValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for EnumValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ListValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ObjectValue<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ObjectField<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}
