use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use crate::GraphQLLocation;
use inherent::inherent;

// =========================================================
// Type-system definition enum
// =========================================================

/// A type-system definition or extension.
///
/// Only the object form of type extensions (`extend type …`) is part
/// of the recognized grammar; extending scalars, interfaces, unions,
/// enums, inputs, or the schema is a syntax error.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition<'src> {
    Schema(SchemaDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    ObjectExtension(ObjectTypeExtension<'src>),
    Directive(DirectiveDefinition<'src>),
}

// =========================================================
// Schema definition
// =========================================================

/// A `schema { … }` definition naming the root operation types.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A single `query: QueryRoot` entry within a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition<'src> {
    pub operation: OperationKind,
    pub named_type: NamedType<'src>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Type definitions
// =========================================================

/// A `scalar Name` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A `type Name implements … { fields }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A field within an object or interface type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: Type<'src>,
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An input value: an argument of a field or directive definition, or
/// a field of an input object type.
///
/// The default value, when present, is a const value: variable
/// references inside it are a syntax error.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub value_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An `interface Name { fields }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A `union Name = A | B` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<NamedType<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An `enum Name { values }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// A single value within an enum type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// An `input Name { fields }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Type extensions
// =========================================================

/// An `extend type Name …` extension.
///
/// At least one of `interfaces`, `directives`, or `fields` is always
/// present; an extension adding nothing is a syntax error.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

// =========================================================
// Directive definitions
// =========================================================

/// A `directive @name(args) on LOCATIONS` definition.
///
/// `locations` holds the location names as written; each is validated
/// against the closed [`DirectiveLocation`] set during parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub locations: Vec<Name<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

/// The closed set of positions a directive may be declared for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// The source spelling of this location.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Resolves a source spelling to a directive location.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "QUERY" => Some(DirectiveLocation::Query),
            "MUTATION" => Some(DirectiveLocation::Mutation),
            "SUBSCRIPTION" => Some(DirectiveLocation::Subscription),
            "FIELD" => Some(DirectiveLocation::Field),
            "FRAGMENT_DEFINITION" => Some(DirectiveLocation::FragmentDefinition),
            "FRAGMENT_SPREAD" => Some(DirectiveLocation::FragmentSpread),
            "INLINE_FRAGMENT" => Some(DirectiveLocation::InlineFragment),
            "SCHEMA" => Some(DirectiveLocation::Schema),
            "SCALAR" => Some(DirectiveLocation::Scalar),
            "OBJECT" => Some(DirectiveLocation::Object),
            "FIELD_DEFINITION" => Some(DirectiveLocation::FieldDefinition),
            "ARGUMENT_DEFINITION" => Some(DirectiveLocation::ArgumentDefinition),
            "INTERFACE" => Some(DirectiveLocation::Interface),
            "UNION" => Some(DirectiveLocation::Union),
            "ENUM" => Some(DirectiveLocation::Enum),
            "ENUM_VALUE" => Some(DirectiveLocation::EnumValue),
            "INPUT_OBJECT" => Some(DirectiveLocation::InputObject),
            "INPUT_FIELD_DEFINITION" => {
                Some(DirectiveLocation::InputFieldDefinition)
            }
            _ => None,
        }
    }
}

// =========================================================
// AstNode impls
// =========================================================

#[inherent]
impl<'src> AstNode<'src> for TypeSystemDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        match self {
            TypeSystemDefinition::Schema(d) => d.location(),
            TypeSystemDefinition::Scalar(d) => d.location(),
            TypeSystemDefinition::Object(d) => d.location(),
            TypeSystemDefinition::Interface(d) => d.location(),
            TypeSystemDefinition::Union(d) => d.location(),
            TypeSystemDefinition::Enum(d) => d.location(),
            TypeSystemDefinition::InputObject(d) => d.location(),
            TypeSystemDefinition::ObjectExtension(d) => d.location(),
            TypeSystemDefinition::Directive(d) => d.location(),
        }
    }
}

#[inherent]
impl<'src> AstNode<'src> for SchemaDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for OperationTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ScalarTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ObjectTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for FieldDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for InputValueDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for InterfaceTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for UnionTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for EnumTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for EnumValueDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for InputObjectTypeDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for ObjectTypeExtension<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for DirectiveDefinition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}
