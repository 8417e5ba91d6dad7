use crate::errors::{ApiSurfaceError, Result};
use crate::export::path::entry_path;

use super::element::{AccessModifier, CodeElement, ElementId, ElementKind};
use super::type_ref::TypeRef;

/// Arena owning every element of a code model tree
///
/// The root namespace is created together with the model and is always the
/// first element. Elements are appended through the `add_*` builders, which
/// link child and parent handles in both directions. Elements are never
/// removed, so handles stay valid for the lifetime of the model.
#[derive(Debug, Clone)]
pub struct CodeModel {
    elements: Vec<CodeElement>,
}

impl CodeModel {
    /// Create a model holding a single root namespace
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` if `root_namespace` is empty.
    pub fn new(root_namespace: impl Into<String>) -> Result<Self> {
        let name = root_namespace.into();
        if name.is_empty() {
            return Err(ApiSurfaceError::EmptyName {
                kind: ElementKind::Namespace.label().to_string(),
            });
        }

        Ok(Self {
            elements: vec![CodeElement {
                name,
                parent: None,
                children: Vec::new(),
                kind: ElementKind::Namespace,
            }],
        })
    }

    /// Handle of the root namespace
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements, root included
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Look up an element, `None` for a foreign handle
    pub fn element(&self, id: ElementId) -> Option<&CodeElement> {
        self.elements.get(id.0)
    }

    /// Look up an element
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the handle is not part of this model.
    pub fn get(&self, id: ElementId) -> Result<&CodeElement> {
        self.element(id)
            .ok_or(ApiSurfaceError::ElementNotFound { element: id.0 })
    }

    /// Child handles of an element in insertion order
    ///
    /// Unknown handles have no children.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id)
            .map(|element| element.children.as_slice())
            .unwrap_or(&[])
    }

    /// Append an element under `parent`
    ///
    /// # Errors
    ///
    /// - `ParentNotFound` if `parent` is not part of this model
    /// - `EmptyName` if `name` is empty
    /// - `DanglingTypeDefinition` if a property type points outside the model
    /// - `InvalidTypeDefinition` if a property type points at anything other
    ///   than a class, enum or interface
    pub fn add_element(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        kind: ElementKind,
    ) -> Result<ElementId> {
        let name = name.into();
        if self.element(parent).is_none() {
            return Err(ApiSurfaceError::ParentNotFound { parent: parent.0 });
        }
        if name.is_empty() {
            return Err(ApiSurfaceError::EmptyName {
                kind: kind.label().to_string(),
            });
        }
        if let ElementKind::Property { type_ref, .. } = &kind {
            self.check_definition(&name, type_ref)?;
        }

        let id = ElementId(self.elements.len());
        self.elements.push(CodeElement {
            name,
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.elements[parent.0].children.push(id);

        tracing::trace!(element = %id, parent = %parent, "Added code element");

        Ok(id)
    }

    /// Add a nested namespace
    ///
    /// The namespace name is expected to already carry its full dotted form
    /// (for example `ApiSdk.Models`).
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_namespace(&mut self, parent: ElementId, name: impl Into<String>) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Namespace)
    }

    /// Add a class
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_class(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        access: AccessModifier,
    ) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Class { access })
    }

    /// Add an enum
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_enum(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        access: AccessModifier,
    ) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Enum { access })
    }

    /// Add an interface
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_interface(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        access: AccessModifier,
    ) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Interface { access })
    }

    /// Add a property
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_property(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        access: AccessModifier,
        type_ref: TypeRef,
    ) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Property { access, type_ref })
    }

    /// Add a method
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_method(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        access: AccessModifier,
    ) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Method { access })
    }

    /// Add an indexer
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_indexer(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        access: AccessModifier,
    ) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Indexer { access })
    }

    /// Add an enum member
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_enum_member(&mut self, parent: ElementId, name: impl Into<String>) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::EnumMember)
    }

    /// Add a free function
    ///
    /// # Errors
    ///
    /// See [`CodeModel::add_element`].
    pub fn add_function(&mut self, parent: ElementId, name: impl Into<String>) -> Result<ElementId> {
        self.add_element(parent, name, ElementKind::Function)
    }

    /// Replace the type of an existing property
    ///
    /// Used when a property type refers to a definition that was added after
    /// the property itself.
    ///
    /// # Errors
    ///
    /// - `ElementNotFound` if `property` is not part of this model or is not
    ///   a property
    /// - `DanglingTypeDefinition` if the new type points outside the model
    /// - `InvalidTypeDefinition` if the new type points at anything other
    ///   than a class, enum or interface
    pub fn set_property_type(&mut self, property: ElementId, type_ref: TypeRef) -> Result<()> {
        let name = self.get(property)?.name.clone();
        self.check_definition(&name, &type_ref)?;

        match &mut self.elements[property.0].kind {
            ElementKind::Property { type_ref: slot, .. } => {
                *slot = type_ref;
                Ok(())
            }
            _ => Err(ApiSurfaceError::ElementNotFound {
                element: property.0,
            }),
        }
    }

    /// Find the namespace or type definition whose canonical path is `path`
    ///
    /// Namespaces match on their own (already dotted) name; classes, enums and
    /// interfaces match on their full path such as `Models.User`.
    ///
    /// # Errors
    ///
    /// - `PathNotFound` if nothing matches
    /// - `AmbiguousPath` if more than one element matches, for example a
    ///   namespace `Models.User` next to a class `User` in `Models`
    pub fn find_by_path(&self, path: &str) -> Result<ElementId> {
        let matches: Vec<ElementId> = (0..self.elements.len())
            .map(ElementId)
            .filter(|id| {
                let element = &self.elements[id.0];
                let candidate = match &element.kind {
                    ElementKind::Namespace => element.name.clone(),
                    kind if kind.is_type_definition() => entry_path(self, *id),
                    _ => return false,
                };
                candidate == path
            })
            .collect();

        match matches.as_slice() {
            [] => Err(ApiSurfaceError::PathNotFound {
                path: path.to_string(),
            }),
            [id] => Ok(*id),
            _ => Err(ApiSurfaceError::AmbiguousPath {
                path: path.to_string(),
                matches: matches.len(),
            }),
        }
    }

    fn check_definition(&self, property: &str, type_ref: &TypeRef) -> Result<()> {
        let Some(definition) = type_ref.definition else {
            return Ok(());
        };

        match self.element(definition) {
            None => Err(ApiSurfaceError::DanglingTypeDefinition {
                property: property.to_string(),
                definition: definition.0,
            }),
            // Only classes, enums and interfaces render as a type; anything
            // else could point back at a property and never terminate.
            Some(element) if !element.kind.is_type_definition() => {
                Err(ApiSurfaceError::InvalidTypeDefinition {
                    property: property.to_string(),
                    definition: definition.0,
                    kind: element.kind.label().to_string(),
                })
            }
            Some(_) => Ok(()),
        }
    }
}
