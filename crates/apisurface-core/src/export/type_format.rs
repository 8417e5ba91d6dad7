use crate::model::{CodeModel, TypeRef};

use super::entry::{entry_for, EntryMode};

/// Canonical text of a type reference
///
/// A reference that resolves to a class, enum or interface renders as that
/// definition's entry (its dotted path); otherwise the reference name is used
/// as is. Arrays and complex collections are wrapped in `[` `]`.
///
/// A definition that yields no entry (a private type, for instance) renders
/// as empty inner text.
pub fn format_type(model: &CodeModel, type_ref: &TypeRef) -> String {
    // TODO: distinguish map-like collection kinds once the model carries them
    let inner = match type_ref.definition {
        Some(definition) => {
            entry_for(model, definition, EntryMode::IncludeDefinitions).unwrap_or_default()
        }
        None => type_ref.name.clone(),
    };

    if type_ref.is_bracketed() {
        format!("[{}]", inner)
    } else {
        inner
    }
}
