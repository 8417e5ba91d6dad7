use apisurface_core::{AccessModifier, CodeModel, CollectionKind, ElementId, TypeRef};

/// Handles of the elements created by [`sample_model`]
#[allow(dead_code)]
pub struct SampleModel {
    pub model: CodeModel,
    pub user: ElementId,
    pub address: ElementId,
    pub status: ElementId,
}

/// A small `Models` namespace:
///
/// - `User { name: string, addresses: [Address], status: Status, tags: [string] }`
/// - `Address { street: string }`
/// - `enum Status`
#[allow(dead_code)]
pub fn sample_model() -> SampleModel {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();

    let user = model.add_class(root, "User", AccessModifier::Public).unwrap();
    let address = model
        .add_class(root, "Address", AccessModifier::Public)
        .unwrap();
    let status = model.add_enum(root, "Status", AccessModifier::Public).unwrap();

    model
        .add_property(user, "name", AccessModifier::Public, TypeRef::primitive("string"))
        .unwrap();
    model
        .add_property(
            user,
            "addresses",
            AccessModifier::Public,
            TypeRef::defined("Address", address).array(),
        )
        .unwrap();
    model
        .add_property(
            user,
            "status",
            AccessModifier::Public,
            TypeRef::defined("Status", status),
        )
        .unwrap();
    model
        .add_property(
            user,
            "tags",
            AccessModifier::Public,
            TypeRef::primitive("string").with_collection_kind(CollectionKind::Complex),
        )
        .unwrap();
    model
        .add_property(
            address,
            "street",
            AccessModifier::Public,
            TypeRef::primitive("string"),
        )
        .unwrap();
    model.add_enum_member(status, "Active").unwrap();

    SampleModel {
        model,
        user,
        address,
        status,
    }
}
