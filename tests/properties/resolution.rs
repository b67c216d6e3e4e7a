//! Property tests for set resolution.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use emotegen::infrastructure::{InMemorySource, SerdeDecoder};
use emotegen::DeclarationRegistry;

fn registry(source: &InMemorySource) -> DeclarationRegistry {
    DeclarationRegistry::new(Arc::new(source.clone()), Arc::new(SerdeDecoder::new()))
}

fn entry_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..12)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a set without a base keeps declaration order.
    #[test]
    fn property_baseless_order_is_declaration_order(names in entry_names()) {
        let variants: Vec<_> = names.iter().map(|n| json!({"name": n})).collect();
        let source = InMemorySource::new()
            .with_document("sets/root.json", json!({"name": "root", "variants": variants}).to_string());

        let set = registry(&source).get(Path::new("sets/root.json")).unwrap();

        let resolved: Vec<&str> = set.iter().map(|e| e.name()).collect();
        prop_assert_eq!(resolved, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: inherited entries keep their position; untouched ones are
    /// unchanged and new entries follow in declaration order.
    #[test]
    fn property_child_preserves_inherited_order(
        names in entry_names(),
        touched in proptest::collection::vec(any::<bool>(), 12),
        added in proptest::collection::btree_set("[A-Z]{1,6}", 0..5),
    ) {
        let base_variants: Vec<_> = names
            .iter()
            .map(|n| json!({"name": n, "objects": [{"type": "eye", "src": "eye.svg"}]}))
            .collect();
        let mut child_variants: Vec<_> = names
            .iter()
            .zip(&touched)
            .filter(|(_, t)| **t)
            .map(|(n, _)| json!({"name": n, "overwrites": [{"id": "eye", "color": "blue"}]}))
            .collect();
        child_variants.extend(added.iter().map(|n| json!({"name": n})));

        let source = InMemorySource::new()
            .with_document("sets/base.json", json!({"name": "base", "variants": base_variants}).to_string())
            .with_document(
                "sets/child.json",
                json!({"name": "child", "basedOn": "base", "variants": child_variants}).to_string(),
            );
        let mut registry = registry(&source);

        let child = registry.get(Path::new("sets/child.json")).unwrap();
        let base = registry.get(Path::new("sets/base.json")).unwrap();

        let expected: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .chain(added.iter().map(String::as_str))
            .collect();
        let resolved: Vec<&str> = child.iter().map(|e| e.name()).collect();
        prop_assert_eq!(resolved, expected);

        for (i, name) in names.iter().enumerate() {
            let entry = child.get(name).unwrap();
            if touched[i] {
                prop_assert_eq!(entry.asset("eye").unwrap().color(), Some("blue"));
                prop_assert_eq!(entry.origin_chain().len(), 2);
            } else {
                prop_assert_eq!(entry, base.get(name).unwrap());
            }
        }
    }

    /// PROPERTY: origin chain length equals the number of declarations that
    /// declared the entry, oldest first.
    #[test]
    fn property_origin_chain_tracks_every_level(depth in 1usize..8) {
        let source = InMemorySource::new().with_document(
            "chain/s0.json",
            json!({"name": "s0", "variants": [{"name": "happy", "objects": [{"type": "eye"}]}]}).to_string(),
        );
        for level in 1..depth {
            source.insert(
                format!("chain/s{level}.json"),
                json!({
                    "name": format!("s{level}"),
                    "basedOn": format!("s{}", level - 1),
                    "variants": [{"name": "happy", "overwrites": [{"id": "eye", "color": format!("c{level}")}]}],
                })
                .to_string(),
            );
        }

        let set = registry(&source)
            .get(Path::new(&format!("chain/s{}.json", depth - 1)))
            .unwrap();

        let happy = set.get("happy").unwrap();
        let expected: Vec<String> = (0..depth).map(|l| format!("s{l}")).collect();
        prop_assert_eq!(happy.origin_chain(), expected.as_slice());
    }

    /// PROPERTY: `remove` deletes exactly the assets of the targeted kinds,
    /// including repeated ones.
    #[test]
    fn property_remove_is_exact(
        distinct in proptest::collection::btree_set("[a-z]{1,6}", 1..10),
        picks in proptest::collection::vec(any::<bool>(), 10),
        layout in proptest::collection::vec(0usize..10, 1..16),
    ) {
        let distinct: Vec<String> = distinct.into_iter().collect();
        let removed: BTreeSet<&str> = distinct
            .iter()
            .zip(&picks)
            .filter(|(_, p)| **p)
            .map(|(k, _)| k.as_str())
            .collect();

        // Every kind appears at least once; `layout` adds repeats in any order.
        let kinds: Vec<&str> = distinct
            .iter()
            .map(String::as_str)
            .chain(layout.iter().map(|i| distinct[i % distinct.len()].as_str()))
            .collect();

        let objects: Vec<_> = kinds.iter().map(|k| json!({"type": k})).collect();
        let overwrites: Vec<_> = removed.iter().map(|k| json!({"id": k, "remove": true})).collect();
        let source = InMemorySource::new()
            .with_document("sets/base.json", json!({"name": "base", "variants": [{"name": "happy", "objects": objects}]}).to_string())
            .with_document(
                "sets/child.json",
                json!({"name": "child", "basedOn": "base", "variants": [{"name": "happy", "overwrites": overwrites}]}).to_string(),
            );

        let set = registry(&source).get(Path::new("sets/child.json")).unwrap();

        let remaining: Vec<&str> = set.get("happy").unwrap().assets().iter().map(|a| a.kind()).collect();
        let expected: Vec<&str> = kinds
            .iter()
            .copied()
            .filter(|k| !removed.contains(k))
            .collect();
        prop_assert_eq!(remaining, expected);
    }
}
