use crate::model::{CodeModel, ElementId, ElementKind};

use super::path::entry_path;
use super::type_format::format_type;

/// Which elements produce an entry of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Snapshot traversal: only properties produce entries
    TopLevel,
    /// Type formatting: classes, enums and interfaces also produce their path
    IncludeDefinitions,
}

/// Canonical entry of a single element, `None` when it has none
///
/// Private elements never produce an entry. Their children are still
/// visited by [`extract_entries`].
pub fn entry_for(model: &CodeModel, id: ElementId, mode: EntryMode) -> Option<String> {
    let element = model.element(id)?;
    if element.is_private() {
        return None;
    }

    let entry = match &element.kind {
        ElementKind::Property { type_ref, .. } => {
            let parent = element.parent?;
            format!(
                "{}::{}:{}",
                entry_path(model, parent),
                element.name,
                format_type(model, type_ref)
            )
        }
        ElementKind::Class { .. } | ElementKind::Enum { .. } | ElementKind::Interface { .. } => {
            if mode != EntryMode::IncludeDefinitions {
                return None;
            }
            entry_path(model, id)
        }
        // Not covered yet: method and indexer signatures, enum members,
        // free functions, inheritance.
        ElementKind::Method { .. }
        | ElementKind::Indexer { .. }
        | ElementKind::EnumMember
        | ElementKind::Function => return None,
        ElementKind::Namespace => return None,
    };

    (!entry.is_empty()).then_some(entry)
}

/// Collect the entries of `root` and all its descendants
///
/// Depth-first, pre-order, children in insertion order. Callers sort the
/// result, so sibling order carries no meaning.
pub fn extract_entries(model: &CodeModel, root: ElementId) -> Vec<String> {
    let mut entries = Vec::new();
    collect(model, root, &mut entries);

    tracing::debug!(
        root = %root,
        entry_count = entries.len(),
        "Extracted snapshot entries"
    );

    entries
}

fn collect(model: &CodeModel, id: ElementId, entries: &mut Vec<String>) {
    if let Some(entry) = entry_for(model, id, EntryMode::TopLevel) {
        entries.push(entry);
    }
    for &child in model.children(id) {
        collect(model, child, entries);
    }
}
