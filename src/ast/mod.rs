//! AST types for parsed GraphQL documents.
//!
//! A closed family of node types, one per grammar production, with
//! enums at the dispatch seams ([`Definition`], [`Selection`],
//! [`Value`], [`Type`], [`TypeSystemDefinition`]). All node types are
//! parameterized over a `'src` lifetime that borrows strings from the
//! source text via [`Cow<'src, str>`].
//!
//! Every node carries a `loc: Option<GraphQLLocation>` bounding the
//! tokens it was built from; the field is `None` when parsing with
//! [`no_location`](crate::ParseOptions::no_location). The AST is a pure
//! tree: nodes own their children, and locations hold cloned token
//! endpoints rather than back-references.
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`GraphQLLocation`]: crate::GraphQLLocation

mod ast_node;
mod document;
mod executable_defs;
mod name;
mod type_reference;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Argument;
pub use executable_defs::Directive;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use name::Name;
pub use type_reference::ListType;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::Type;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocation;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::ObjectTypeExtension;
pub use type_system_defs::OperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeSystemDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
