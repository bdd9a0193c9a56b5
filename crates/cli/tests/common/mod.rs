//! Shared test utilities for biome integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write profile files into temp directories.
//!
//! Invariants / Assumptions:
//! - Host `BIOME_*` and `RUST_LOG` variables never reach the binary under test.
//! - `HOME` and the working directory point into a temp dir, so the default
//!   search path only sees files the test wrote.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a hermetic `biome` command running in `dir`.
pub fn biome_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("biome");

    cmd.current_dir(dir).env("HOME", dir);

    // Clear potential host leakage
    cmd.env_remove("BIOME_NAME")
        .env_remove("BIOME_CONFIG_PATH")
        .env_remove("BIOME_ALLOW_PLAIN_SECRETS")
        .env_remove("BIOME_STAGED_EXPORT")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `.biome.yaml` in `dir` and return its path.
pub fn write_biome_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".biome.yaml");
    fs::write(&path, contents).expect("write biome file");
    path
}
