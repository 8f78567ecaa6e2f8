use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::TypeSystemDefinition;
use crate::GraphQLLocation;
use inherent::inherent;

// =========================================================
// Document
// =========================================================

/// Root AST node for a GraphQL document.
///
/// A document contains a non-empty list of [`Definition`]s, which may
/// mix executable definitions (operations, fragments) with type-system
/// definitions and extensions. Which definition kinds are permitted in
/// a given context (e.g. execution rejecting type definitions) is a
/// validation concern, not a parse concern.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub loc: Option<GraphQLLocation<'src>>,
}

impl<'src> Document<'src> {
    /// Iterate over only the executable definitions (operations and
    /// fragments) in this document.
    pub fn executable_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            matches!(
                d,
                Definition::Operation(_) | Definition::Fragment(_),
            )
        })
    }

    /// Iterate over only the type-system definitions and extensions in
    /// this document.
    pub fn type_system_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions
            .iter()
            .filter(|d| matches!(d, Definition::TypeSystem(_)))
    }
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition in a GraphQL document.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    TypeSystem(TypeSystemDefinition<'src>),
}

#[inherent]
impl<'src> AstNode<'src> for Document<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        self.loc.as_ref()
    }
}

#[inherent]
impl<'src> AstNode<'src> for Definition<'src> {
    pub fn location(&self) -> Option<&GraphQLLocation<'src>> {
        match self {
            Definition::Operation(d) => d.location(),
            Definition::Fragment(d) => d.location(),
            Definition::TypeSystem(d) => d.location(),
        }
    }
}
