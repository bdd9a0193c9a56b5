//! Profile file search path.
//!
//! Responsibilities:
//! - Build the default search path: `.biome.yaml` / `.biome.yml` in the current
//!   directory, then the same names in the user's home directory.
//! - Wrap a single explicit file as a one-entry search path.
//!
//! Does NOT handle:
//! - Opening or parsing files (see `resolver`).
//!
//! Invariants:
//! - Order is priority order; the first file containing the profile wins.
//! - A directory that cannot be determined is left out, never an error.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_FILE_NAMES;

/// Ordered list of candidate profile files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    paths: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Current directory first, then home directory.
    pub fn defaults() -> Self {
        let mut dirs = Vec::with_capacity(2);

        match std::env::current_dir() {
            Ok(dir) => dirs.push(dir),
            Err(e) => tracing::debug!(error = %e, "Current directory unavailable, skipping"),
        }

        match directories::BaseDirs::new() {
            Some(base) => dirs.push(base.home_dir().to_path_buf()),
            None => tracing::debug!("Home directory unavailable, skipping"),
        }

        Self::in_directories(&dirs)
    }

    /// Every default file name in each directory, directories in the given order.
    pub fn in_directories(dirs: &[PathBuf]) -> Self {
        let paths = dirs
            .iter()
            .flat_map(|dir| DEFAULT_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .collect();
        Self { paths }
    }

    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}
