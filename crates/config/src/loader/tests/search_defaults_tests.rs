//! Default search path tests.
//!
//! Responsibilities:
//! - Test that the working directory is searched before the home directory.
//! - Test both default file names.
//!
//! Invariants / Assumptions:
//! - Tests hold `env_lock()` because they change cwd and HOME.

use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, write_biome_file};
use crate::loader::resolver::load_from_defaults;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_working_directory_wins_over_home() {
    let _lock = env_lock().lock().unwrap();
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write_biome_file(work.path(), ".biome.yaml", "Name: dev\n");
    write_biome_file(home.path(), ".biome.yaml", "Name: dev\n");
    let _cwd_guard = CwdGuard::new(&work);

    temp_env::with_var("HOME", Some(home.path()), || {
        let profile = load_from_defaults("dev").unwrap();
        let found_dir = profile.source_location.parent().unwrap().canonicalize().unwrap();
        assert_eq!(found_dir, work.path().canonicalize().unwrap());
    });
}

#[test]
#[serial]
fn test_home_directory_is_consulted() {
    let _lock = env_lock().lock().unwrap();
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write_biome_file(home.path(), ".biome.yml", "Name: from-home\n");
    let _cwd_guard = CwdGuard::new(&work);

    temp_env::with_var("HOME", Some(home.path()), || {
        let profile = load_from_defaults("from-home").unwrap();
        assert!(profile.source_location.ends_with(".biome.yml"));
    });
}

#[test]
#[serial]
fn test_yaml_extension_checked_before_yml() {
    let _lock = env_lock().lock().unwrap();
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    write_biome_file(work.path(), ".biome.yaml", "Name: dev\nenvironment:\n  EXT: yaml\n");
    write_biome_file(work.path(), ".biome.yml", "Name: dev\nenvironment:\n  EXT: yml\n");
    let _cwd_guard = CwdGuard::new(&work);

    temp_env::with_var("HOME", Some(home.path()), || {
        let profile = load_from_defaults("dev").unwrap();
        assert!(profile.source_location.ends_with(".biome.yaml"));
    });
}
