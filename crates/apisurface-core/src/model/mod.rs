pub mod code_model;
pub mod element;
pub mod type_ref;

pub use code_model::CodeModel;
pub use element::{AccessModifier, CodeElement, ElementId, ElementKind};
pub use type_ref::{CollectionKind, TypeRef};
