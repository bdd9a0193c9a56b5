//! Shared helpers for static source checks.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let mut dir = manifest_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return manifest_dir,
        }
    }
}

/// All .rs files under `crates/`, skipping build output and this crate.
pub fn crate_sources() -> Vec<PathBuf> {
    let crates_dir = workspace_root().join("crates");
    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// True for integration test files and `tests` submodules.
pub fn is_test_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/")
        || path_str.ends_with("_tests.rs")
        || path_str.ends_with("/tests.rs")
}

/// Source text before the first test-only item.
///
/// Assumes the test module is the last item in the file, which is how every
/// crate here lays them out.
pub fn production_source(content: &str) -> &str {
    let start = ["#[cfg(test)]", "#[cfg(all(test"]
        .iter()
        .filter_map(|marker| content.find(marker))
        .min();
    match start {
        Some(index) => &content[..index],
        None => content,
    }
}

/// Path relative to the workspace root, for messages.
pub fn display_path(path: &Path) -> String {
    let root = workspace_root();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
