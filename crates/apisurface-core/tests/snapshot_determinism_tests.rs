// Property tests for snapshot determinism
// The rendered line set must not depend on child insertion order, and the
// rendered sequence must always be sorted case-insensitively.

use apisurface_core::export::{compare_ignore_case, extract_sorted_entries, render_snapshot};
use apisurface_core::{AccessModifier, CodeModel, ElementId, LineEnding, TypeRef};
use proptest::prelude::*;
use std::cmp::Ordering;

const CLASS_NAMES: [&str; 3] = ["User", "address", "Order"];

type PropertySpec = (usize, String, String, bool);

fn build(properties: &[PropertySpec]) -> CodeModel {
    let mut model = CodeModel::new("Models").unwrap();
    let root = model.root();
    let classes: Vec<ElementId> = CLASS_NAMES
        .iter()
        .map(|name| model.add_class(root, *name, AccessModifier::Public).unwrap())
        .collect();

    for (class, name, type_name, is_array) in properties {
        let mut type_ref = TypeRef::primitive(type_name.as_str());
        type_ref.is_array = *is_array;
        model
            .add_property(classes[*class], name.as_str(), AccessModifier::Public, type_ref)
            .unwrap();
    }

    model
}

fn property_specs() -> impl Strategy<Value = Vec<PropertySpec>> {
    prop::collection::vec(
        (
            0usize..CLASS_NAMES.len(),
            "[a-zA-Z][a-zA-Z0-9_]{0,8}",
            "(string|int32|Boolean|date)",
            any::<bool>(),
        ),
        0..24,
    )
}

proptest! {
    #[test]
    fn prop_line_set_independent_of_insertion_order(
        (original, shuffled) in property_specs()
            .prop_flat_map(|specs| (Just(specs.clone()), Just(specs).prop_shuffle()))
    ) {
        let first = build(&original);
        let second = build(&shuffled);

        let mut lines_a = extract_sorted_entries(&first, first.root());
        let mut lines_b = extract_sorted_entries(&second, second.root());
        lines_a.sort();
        lines_b.sort();

        prop_assert_eq!(lines_a, lines_b);
    }

    #[test]
    fn prop_rendered_lines_are_sorted(specs in property_specs()) {
        let model = build(&specs);
        let lines = extract_sorted_entries(&model, model.root());

        for pair in lines.windows(2) {
            prop_assert_ne!(compare_ignore_case(&pair[0], &pair[1]), Ordering::Greater);
        }
        prop_assert_eq!(lines.len(), specs.len());
    }

    #[test]
    fn prop_render_is_idempotent(specs in property_specs()) {
        let model = build(&specs);

        let first = render_snapshot(&model, model.root(), LineEnding::Lf);
        let second = render_snapshot(&model, model.root(), LineEnding::Lf);

        prop_assert_eq!(first, second);
    }
}
