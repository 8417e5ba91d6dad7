// Scenario tests for canonical entry extraction
// Covers entry formats, visibility filtering, and rendering of whole trees

mod common;

use apisurface_core::export::{extract_sorted_entries, render_snapshot, LineEnding};
use apisurface_core::{AccessModifier, CodeModel, TypeRef};
use common::sample_model;

#[test]
fn test_primitive_property_entry() {
    let mut model = CodeModel::new("Models").unwrap();
    let user = model
        .add_class(model.root(), "User", AccessModifier::Public)
        .unwrap();
    model
        .add_property(user, "name", AccessModifier::Public, TypeRef::primitive("string"))
        .unwrap();

    let entries = extract_sorted_entries(&model, model.root());

    assert_eq!(entries, vec!["Models.User::name:string"]);
}

#[test]
fn test_array_of_user_defined_class() {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let user = model.add_class(root, "User", AccessModifier::Public).unwrap();
    let address = model
        .add_class(root, "Address", AccessModifier::Public)
        .unwrap();
    model
        .add_property(
            user,
            "addresses",
            AccessModifier::Public,
            TypeRef::defined("Address", address).array(),
        )
        .unwrap();

    let entries = extract_sorted_entries(&model, root);

    assert_eq!(entries, vec!["Models.User::addresses:[Models.Address]"]);
}

#[test]
fn test_sample_model_snapshot() {
    let sample = sample_model();

    let content = render_snapshot(&sample.model, sample.model.root(), LineEnding::Lf);

    assert_eq!(
        content,
        "Models.Address::street:string\n\
         Models.User::addresses:[Models.Address]\n\
         Models.User::name:string\n\
         Models.User::status:Models.Status\n\
         Models.User::tags:[string]"
    );
}

#[test]
fn test_empty_namespace_renders_nothing() {
    let model = CodeModel::new("Models").unwrap();

    assert!(extract_sorted_entries(&model, model.root()).is_empty());
    assert_eq!(render_snapshot(&model, model.root(), LineEnding::Lf), "");
}

#[test]
fn test_private_class_still_contributes_public_properties() {
    let mut model = CodeModel::new("Models").unwrap();
    let hidden = model
        .add_class(model.root(), "Hidden", AccessModifier::Private)
        .unwrap();
    model
        .add_property(hidden, "visible", AccessModifier::Public, TypeRef::primitive("int32"))
        .unwrap();
    model
        .add_property(hidden, "secret", AccessModifier::Private, TypeRef::primitive("int32"))
        .unwrap();

    let entries = extract_sorted_entries(&model, model.root());

    assert_eq!(entries, vec!["Models.Hidden::visible:int32"]);
}

#[test]
fn test_property_typed_with_private_definition_keeps_brackets() {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let user = model.add_class(root, "User", AccessModifier::Public).unwrap();
    let hidden = model
        .add_class(root, "Hidden", AccessModifier::Private)
        .unwrap();
    model
        .add_property(
            user,
            "items",
            AccessModifier::Public,
            TypeRef::defined("Hidden", hidden).array(),
        )
        .unwrap();

    assert_eq!(
        extract_sorted_entries(&model, root),
        vec!["Models.User::items:[]"]
    );
}

#[test]
fn test_protected_and_internal_are_exported() {
    let mut model = CodeModel::new("Models").unwrap();
    let user = model
        .add_class(model.root(), "User", AccessModifier::Internal)
        .unwrap();
    model
        .add_property(user, "id", AccessModifier::Protected, TypeRef::primitive("guid"))
        .unwrap();

    assert_eq!(
        extract_sorted_entries(&model, model.root()),
        vec!["Models.User::id:guid"]
    );
}

#[test]
fn test_property_directly_under_namespace() {
    let mut model = CodeModel::new("Models").unwrap();
    model
        .add_property(
            model.root(),
            "version",
            AccessModifier::Public,
            TypeRef::primitive("string"),
        )
        .unwrap();

    assert_eq!(
        extract_sorted_entries(&model, model.root()),
        vec!["Models::version:string"]
    );
}

#[test]
fn test_nested_namespaces_use_flattened_names() {
    let mut model = CodeModel::new("ApiSdk").unwrap();
    let models = model.add_namespace(model.root(), "ApiSdk.Models").unwrap();
    let user = model.add_class(models, "User", AccessModifier::Public).unwrap();
    let kind = model.add_enum(user, "Kind", AccessModifier::Public).unwrap();
    model
        .add_property(user, "kind", AccessModifier::Public, TypeRef::defined("Kind", kind))
        .unwrap();

    assert_eq!(
        extract_sorted_entries(&model, model.root()),
        vec!["ApiSdk.Models.User::kind:ApiSdk.Models.User.Kind"]
    );
}

#[test]
fn test_unhandled_kinds_produce_no_entries() {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let client = model
        .add_class(root, "Client", AccessModifier::Public)
        .unwrap();
    model.add_method(client, "get", AccessModifier::Public).unwrap();
    model.add_indexer(client, "byId", AccessModifier::Public).unwrap();
    model.add_function(root, "deserialize").unwrap();
    let color = model.add_enum(root, "Color", AccessModifier::Public).unwrap();
    model.add_enum_member(color, "Red").unwrap();

    assert!(extract_sorted_entries(&model, root).is_empty());
}

#[test]
fn test_extraction_from_subtree_root() {
    let sample = sample_model();

    let entries = extract_sorted_entries(&sample.model, sample.address);

    assert_eq!(entries, vec!["Models.Address::street:string"]);
}

#[test]
fn test_lines_sorted_case_insensitively() {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let beta = model.add_class(root, "beta", AccessModifier::Public).unwrap();
    let alpha = model.add_class(root, "Alpha", AccessModifier::Public).unwrap();
    model
        .add_property(beta, "x", AccessModifier::Public, TypeRef::primitive("int32"))
        .unwrap();
    model
        .add_property(alpha, "x", AccessModifier::Public, TypeRef::primitive("int32"))
        .unwrap();

    assert_eq!(
        extract_sorted_entries(&model, root),
        vec!["Models.Alpha::x:int32", "Models.beta::x:int32"]
    );
}
