//! Property-based tests for inheritance merging.
//!
//! Test coverage:
//! - Disjoint keys across a chain: the resolved profile holds the union.
//! - Overlapping keys: the nearest definer's value wins.
//! - Commands: ancestors run first, root-most first.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use proptest::prelude::*;
use tempfile::TempDir;

use biome_config::{ValueSpecification, load_from_file};

/// Variables of one profile in a chain, index 0 being the requested profile.
fn chain_strategy() -> impl Strategy<Value = Vec<BTreeMap<String, String>>> {
    prop::collection::vec(
        prop::collection::btree_map("[A-Z][A-Z0-9_]{0,6}", "[a-z0-9]{1,8}", 0..5),
        1..6,
    )
}

/// Render a chain as a multi-document file; profile `p{i}` inherits from `p{i+1}`.
fn render_chain(levels: &[BTreeMap<String, String>]) -> String {
    let mut out = String::new();
    for (i, vars) in levels.iter().enumerate() {
        writeln!(out, "---\nName: p{i}").unwrap();
        if i + 1 < levels.len() {
            writeln!(out, "inherit_from: p{}", i + 1).unwrap();
        }
        writeln!(out, "commands:\n  - step{i}").unwrap();
        writeln!(out, "environment:").unwrap();
        for (key, value) in vars {
            writeln!(out, "  \"{key}\": \"{value}\"").unwrap();
        }
        if vars.is_empty() {
            writeln!(out, "  _PLACEHOLDER_{i}: \"x\"").unwrap();
        }
    }
    out
}

fn resolve_chain(levels: &[BTreeMap<String, String>]) -> BTreeMap<String, ValueSpecification> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chain.yaml");
    std::fs::write(&path, render_chain(levels)).unwrap();
    load_from_file("p0", &path).unwrap().variables
}

proptest! {
    #[test]
    fn disjoint_keys_resolve_to_union(levels in chain_strategy()) {
        let prefixed: Vec<BTreeMap<String, String>> = levels
            .iter()
            .enumerate()
            .map(|(i, vars)| vars.iter().map(|(k, v)| (format!("L{i}_{k}"), v.clone())).collect())
            .collect();

        let resolved = resolve_chain(&prefixed);

        for vars in &prefixed {
            for (key, value) in vars {
                prop_assert_eq!(
                    resolved.get(key),
                    Some(&ValueSpecification::Literal(value.clone()))
                );
            }
        }
        let expected: usize = prefixed.iter().map(|v| v.len().max(1)).sum();
        prop_assert_eq!(resolved.len(), expected);
    }

    #[test]
    fn nearest_definer_wins(levels in chain_strategy()) {
        let resolved = resolve_chain(&levels);

        for (key, spec) in &resolved {
            if key.starts_with("_PLACEHOLDER_") {
                continue;
            }
            let nearest = levels.iter().find_map(|vars| vars.get(key)).unwrap();
            prop_assert_eq!(spec, &ValueSpecification::Literal(nearest.clone()));
        }
    }
}

#[test]
fn test_commands_run_oldest_ancestor_first() {
    let levels = vec![BTreeMap::new(); 4];
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chain.yaml");
    std::fs::write(&path, render_chain(&levels)).unwrap();

    let profile = load_from_file("p0", &path).unwrap();

    assert_eq!(
        profile.setup_commands,
        vec!["step3", "step2", "step1", "step0"]
    );
}
