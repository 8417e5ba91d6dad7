//! Model description files
//!
//! A YAML or JSON description of a code model tree, loaded into a
//! [`CodeModel`]. Type definitions are referenced by dotted path and resolved
//! once the whole tree is built, so forward references are allowed.

use std::fs;
use std::path::Path;

use apisurface_core::errors::{ExError, ExErrorKind};
use apisurface_core::{AccessModifier, CodeModel, CollectionKind, ElementId, ElementKind, TypeRef};
use serde::Deserialize;

/// Top-level model file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    /// Root namespace name
    pub namespace: String,

    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

/// Element definition in a model file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    pub kind: ElementSpecKind,
    pub name: String,

    #[serde(default)]
    pub access: AccessModifier,

    /// Property type (required for properties, ignored otherwise)
    #[serde(rename = "type")]
    pub type_ref: Option<TypeSpec>,

    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementSpecKind {
    Namespace,
    Class,
    Enum,
    Interface,
    Property,
    Method,
    Indexer,
    EnumMember,
    Function,
}

/// Type reference in a model file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    pub name: String,

    #[serde(default)]
    pub is_array: bool,

    #[serde(default)]
    pub collection_kind: CollectionKind,

    /// Dotted path of a class, enum or interface in the same file
    pub definition: Option<String>,
}

/// Load and build a model from a file
///
/// `.json` files are parsed as JSON, anything else as YAML.
pub fn load_model_file(path: &Path) -> Result<CodeModel, ExError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_model_file")
            .with_path(path.display().to_string())
            .with_message(e.to_string())
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: ModelFile = if is_json {
        serde_json::from_str(&content).map_err(|e| parse_error(path, e.to_string()))?
    } else {
        serde_yaml::from_str(&content).map_err(|e| parse_error(path, e.to_string()))?
    };

    build_model(&file)
}

/// Build a code model from a parsed model file
pub fn build_model(file: &ModelFile) -> Result<CodeModel, ExError> {
    let mut model = CodeModel::new(file.namespace.as_str())?;
    let mut pending = Vec::new();

    let root = model.root();
    for child in &file.children {
        add_spec(&mut model, root, child, &mut pending)?;
    }

    for (property, spec) in pending {
        let definition = match &spec.definition {
            Some(path) => Some(model.find_by_path(path)?),
            None => None,
        };
        model.set_property_type(property, type_ref(spec, definition))?;
    }

    tracing::debug!(
        namespace = %file.namespace,
        element_count = model.element_count(),
        "Built code model from file"
    );

    Ok(model)
}

fn add_spec<'a>(
    model: &mut CodeModel,
    parent: ElementId,
    spec: &'a ElementSpec,
    pending: &mut Vec<(ElementId, &'a TypeSpec)>,
) -> Result<ElementId, ExError> {
    let access = spec.access;
    let kind = match spec.kind {
        ElementSpecKind::Namespace => ElementKind::Namespace,
        ElementSpecKind::Class => ElementKind::Class { access },
        ElementSpecKind::Enum => ElementKind::Enum { access },
        ElementSpecKind::Interface => ElementKind::Interface { access },
        ElementSpecKind::Property => {
            let type_spec = spec.type_ref.as_ref().ok_or_else(|| {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("build_model")
                    .with_element(spec.name.clone())
                    .with_message("Property has no type")
            })?;
            // Definitions are attached once every element exists
            ElementKind::Property {
                access,
                type_ref: type_ref(type_spec, None),
            }
        }
        ElementSpecKind::Method => ElementKind::Method { access },
        ElementSpecKind::Indexer => ElementKind::Indexer { access },
        ElementSpecKind::EnumMember => ElementKind::EnumMember,
        ElementSpecKind::Function => ElementKind::Function,
    };

    let id = model.add_element(parent, spec.name.as_str(), kind)?;

    if let Some(type_spec) = &spec.type_ref {
        if spec.kind == ElementSpecKind::Property && type_spec.definition.is_some() {
            pending.push((id, type_spec));
        }
    }

    for child in &spec.children {
        add_spec(model, id, child, pending)?;
    }

    Ok(id)
}

fn type_ref(spec: &TypeSpec, definition: Option<ElementId>) -> TypeRef {
    TypeRef {
        name: spec.name.clone(),
        is_array: spec.is_array,
        collection_kind: spec.collection_kind,
        definition,
    }
}

fn parse_error(path: &Path, message: String) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("parse_model_file")
        .with_path(path.display().to_string())
        .with_message(message)
}
