use serde::{Deserialize, Serialize};

use super::element::ElementId;

/// Collection shape of a type reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    #[default]
    None,
    Array,
    Complex,
}

/// Type of a property or member
///
/// `definition` is set only when the reference denotes a user-defined class,
/// enum or interface. For primitives only `name` is meaningful.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeRef {
    pub name: String,
    pub is_array: bool,
    pub collection_kind: CollectionKind,
    pub definition: Option<ElementId>,
}

impl TypeRef {
    /// Reference to a primitive type such as `string` or `int64`
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reference to a user-defined type stored in the model
    pub fn defined(name: impl Into<String>, definition: ElementId) -> Self {
        Self {
            name: name.into(),
            definition: Some(definition),
            ..Self::default()
        }
    }

    /// Mark the reference as an array
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Set the collection kind
    pub fn with_collection_kind(mut self, kind: CollectionKind) -> Self {
        self.collection_kind = kind;
        self
    }

    /// True when the canonical form wraps the type in brackets
    pub fn is_bracketed(&self) -> bool {
        self.is_array || self.collection_kind == CollectionKind::Complex
    }
}
