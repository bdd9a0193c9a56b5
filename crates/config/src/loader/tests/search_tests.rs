//! Search path walking tests.
//!
//! Responsibilities:
//! - Test that absent files are skipped and later files consulted.
//! - Test that parse errors are never suppressed by the fallback.
//! - Test that inheritance stays within the file the profile was found in.

use tempfile::TempDir;

use super::write_biome_file;
use crate::loader::error::ConfigError;
use crate::loader::resolver::find_profile;
use crate::loader::search::SearchPath;

#[test]
fn test_absent_file_falls_through_to_next() {
    let temp_dir = TempDir::new().unwrap();
    let present = write_biome_file(temp_dir.path(), "second.yaml", "Name: dev\n");
    let search = SearchPath::new(vec![temp_dir.path().join("absent.yaml"), present.clone()]);

    let profile = find_profile("dev", &search).unwrap();

    assert_eq!(profile.name, "dev");
    assert_eq!(profile.source_location, present);
}

#[test]
fn test_file_without_profile_falls_through_to_next() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_biome_file(temp_dir.path(), "first.yaml", "Name: other\n");
    let second = write_biome_file(temp_dir.path(), "second.yaml", "Name: dev\n");

    let profile = find_profile("dev", &SearchPath::new(vec![first, second.clone()])).unwrap();
    assert_eq!(profile.source_location, second);
}

#[test]
fn test_first_file_declaring_profile_wins() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_biome_file(
        temp_dir.path(),
        "first.yaml",
        "Name: dev\nenvironment:\n  FROM: first\n",
    );
    let second = write_biome_file(
        temp_dir.path(),
        "second.yaml",
        "Name: dev\nenvironment:\n  FROM: second\n",
    );

    let profile = find_profile("dev", &SearchPath::new(vec![first.clone(), second])).unwrap();
    assert_eq!(profile.source_location, first);
}

#[test]
fn test_parse_error_is_not_suppressed() {
    let temp_dir = TempDir::new().unwrap();
    let broken = write_biome_file(temp_dir.path(), "broken.yaml", "Name: [unterminated\n");
    let good = write_biome_file(temp_dir.path(), "good.yaml", "Name: dev\n");

    let err = find_profile("dev", &SearchPath::new(vec![broken.clone(), good])).unwrap_err();

    match err {
        ConfigError::Parse { path, .. } => assert_eq!(path, broken),
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_is_not_suppressed() {
    let temp_dir = TempDir::new().unwrap();
    let corrupt = temp_dir.path().join("corrupt.yaml");
    std::fs::write(&corrupt, b"Name: dev\nenvironment:\n  A: \"\xff\xfe\"\n").unwrap();
    let good = write_biome_file(temp_dir.path(), "good.yaml", "Name: dev\n");

    let err = find_profile("dev", &SearchPath::new(vec![corrupt.clone(), good])).unwrap_err();

    match err {
        ConfigError::Encoding { path, .. } => assert_eq!(path, corrupt),
        other => panic!("expected Encoding error, got {:?}", other),
    }
}

#[test]
fn test_directory_in_search_path_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_biome_file(temp_dir.path(), "good.yaml", "Name: dev\n");

    let search = SearchPath::new(vec![temp_dir.path().to_path_buf(), good]);
    assert!(find_profile("dev", &search).is_ok());
}

#[test]
fn test_parent_must_live_in_same_file() {
    let temp_dir = TempDir::new().unwrap();
    let child = write_biome_file(
        temp_dir.path(),
        "child.yaml",
        "Name: child\ninherit_from: base\n",
    );
    let base = write_biome_file(temp_dir.path(), "base.yaml", "Name: base\n");

    let err = find_profile("child", &SearchPath::new(vec![child, base])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingParent { .. }));
}

#[test]
fn test_not_found_lists_searched_files() {
    let temp_dir = TempDir::new().unwrap();
    let search = SearchPath::in_directories(&[temp_dir.path().to_path_buf()]);

    let err = find_profile("nope", &search).unwrap_err();

    match err {
        ConfigError::ProfileNotFound { name, searched } => {
            assert_eq!(name, "nope");
            assert_eq!(searched.len(), 2);
        }
        other => panic!("expected ProfileNotFound, got {:?}", other),
    }
}
