use apisurface_core::{AccessModifier, CodeModel, TypeRef};

/// `Models.User { name: string, addresses: [Models.Address] }` plus
/// `Models.Address { street: string }`
#[allow(dead_code)]
pub fn user_model() -> CodeModel {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let user = model.add_class(root, "User", AccessModifier::Public).unwrap();
    let address = model
        .add_class(root, "Address", AccessModifier::Public)
        .unwrap();

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
            address,
            "street",
            AccessModifier::Public,
            TypeRef::primitive("string"),
        )
        .unwrap();

    model
}
