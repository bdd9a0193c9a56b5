//! Tests for profile resolution.
//!
//! Responsibilities:
//! - Test inheritance merging rules and inheritance failures.
//! - Test search path fallback and error non-suppression.
//! - Test the default search path against a fake home and working directory.
//!
//! Does NOT handle:
//! - Document indexing details (tested in document.rs).
//! - Dotenv parsing (tested in env.rs).
//!
//! Invariants:
//! - Tests that change cwd or HOME hold `env_lock()` and use `serial_test`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod search_defaults_tests;
pub mod search_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_biome_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
