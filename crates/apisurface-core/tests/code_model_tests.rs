// Tests for code model construction and validation

mod common;

use apisurface_core::errors::ApiSurfaceError;
use apisurface_core::{AccessModifier, CodeModel, ElementKind, TypeRef};
use common::sample_model;

#[test]
fn test_empty_root_name_rejected() {
    let result = CodeModel::new("");
    assert!(matches!(result, Err(ApiSurfaceError::EmptyName { .. })));
}

#[test]
fn test_empty_element_name_rejected() {
    let mut model = CodeModel::new("Models").unwrap();

    let result = model.add_class(model.root(), "", AccessModifier::Public);

    assert_eq!(
        result,
        Err(ApiSurfaceError::EmptyName {
            kind: "class".to_string()
        })
    );
    assert_eq!(model.element_count(), 1);
}

#[test]
fn test_foreign_parent_rejected() {
    let sample = sample_model();
    let mut other = CodeModel::new("Other").unwrap();

    let result = other.add_class(sample.status, "Orphan", AccessModifier::Public);

    assert!(matches!(
        result,
        Err(ApiSurfaceError::ParentNotFound { .. })
    ));
}

#[test]
fn test_dangling_type_definition_rejected() {
    let sample = sample_model();
    let mut other = CodeModel::new("Other").unwrap();
    let holder = other
        .add_class(other.root(), "Holder", AccessModifier::Public)
        .unwrap();

    let result = other.add_property(
        holder,
        "user",
        AccessModifier::Public,
        TypeRef::defined("User", sample.status),
    );

    assert!(matches!(
        result,
        Err(ApiSurfaceError::DanglingTypeDefinition { .. })
    ));
}

#[test]
fn test_set_property_type_allows_forward_reference() {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let user = model.add_class(root, "User", AccessModifier::Public).unwrap();
    let address = model
        .add_property(user, "address", AccessModifier::Public, TypeRef::primitive("Address"))
        .unwrap();
    let definition = model
        .add_class(root, "Address", AccessModifier::Public)
        .unwrap();

    model
        .set_property_type(address, TypeRef::defined("Address", definition))
        .unwrap();

    match &model.get(address).unwrap().kind {
        ElementKind::Property { type_ref, .. } => {
            assert_eq!(type_ref.definition, Some(definition))
        }
        other => panic!("expected property, got {:?}", other),
    }
}

#[test]
fn test_children_preserve_insertion_order() {
    let sample = sample_model();
    let names: Vec<&str> = sample
        .model
        .children(sample.user)
        .iter()
        .map(|id| sample.model.get(*id).unwrap().name.as_str())
        .collect();

    assert_eq!(names, vec!["name", "addresses", "status", "tags"]);
}
