use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;

/// Handle to an element stored in a [`CodeModel`](super::CodeModel) arena
///
/// Handles are plain indices. They never own the element they point at, so
/// parent links can be held without forming reference-counted cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visibility of an accessible element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessModifier {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

/// Closed set of code model element kinds
///
/// Kinds that carry an access modifier expose it through
/// [`ElementKind::access`]. `Method`, `Indexer`, `EnumMember` and `Function`
/// are modelled so the tree can hold them, but they produce no snapshot entry
/// yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Namespace,
    Class { access: AccessModifier },
    Enum { access: AccessModifier },
    Interface { access: AccessModifier },
    Property { access: AccessModifier, type_ref: TypeRef },
    Method { access: AccessModifier },
    Indexer { access: AccessModifier },
    EnumMember,
    Function,
}

impl ElementKind {
    /// Access modifier, for kinds that have one
    pub fn access(&self) -> Option<AccessModifier> {
        match self {
            ElementKind::Class { access }
            | ElementKind::Enum { access }
            | ElementKind::Interface { access }
            | ElementKind::Property { access, .. }
            | ElementKind::Method { access }
            | ElementKind::Indexer { access } => Some(*access),
            ElementKind::Namespace | ElementKind::EnumMember | ElementKind::Function => None,
        }
    }

    /// True for kinds a type reference can resolve to (class, enum, interface)
    pub fn is_type_definition(&self) -> bool {
        matches!(
            self,
            ElementKind::Class { .. } | ElementKind::Enum { .. } | ElementKind::Interface { .. }
        )
    }

    /// Short lowercase label used in logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Namespace => "namespace",
            ElementKind::Class { .. } => "class",
            ElementKind::Enum { .. } => "enum",
            ElementKind::Interface { .. } => "interface",
            ElementKind::Property { .. } => "property",
            ElementKind::Method { .. } => "method",
            ElementKind::Indexer { .. } => "indexer",
            ElementKind::EnumMember => "enum_member",
            ElementKind::Function => "function",
        }
    }
}

/// A node of the code model tree
#[derive(Debug, Clone, PartialEq)]
pub struct CodeElement {
    /// Element name (never empty)
    pub name: String,

    /// Parent handle (None only for the root namespace)
    pub parent: Option<ElementId>,

    /// Child handles in insertion order
    pub children: Vec<ElementId>,

    /// Kind-specific data
    pub kind: ElementKind,
}

impl CodeElement {
    /// Check if this element is private
    pub fn is_private(&self) -> bool {
        self.kind.access() == Some(AccessModifier::Private)
    }
}
