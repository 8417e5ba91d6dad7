use crate::model::{CodeModel, ElementId, ElementKind};

/// Fully qualified dotted path of a namespace or type definition
///
/// - Class, enum and interface with a parent: `{ParentPath}.{Name}`
/// - Namespace: its own name (namespace names are already flattened, so
///   the parent chain is not walked past a namespace)
/// - Anything else, or a type definition without a parent: empty string
pub fn entry_path(model: &CodeModel, id: ElementId) -> String {
    let Some(element) = model.element(id) else {
        return String::new();
    };

    match (&element.kind, element.parent) {
        (ElementKind::Namespace, _) => element.name.clone(),
        (kind, Some(parent)) if kind.is_type_definition() => {
            format!("{}.{}", entry_path(model, parent), element.name)
        }
        _ => String::new(),
    }
}
