//! Environment variable and dotenv file helpers.
//!
//! Responsibilities:
//! - Read tool settings from environment variables with empty/whitespace filtering.
//! - Read an external dotenv file into a key/value map.
//!
//! Does NOT handle:
//! - Deciding which dotenv keys are used (declared variables win; see the engine crate).
//! - Writing dotenv files (see `export`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Dotenv errors carry the path and a byte index, never line contents.
//! - Reading a dotenv file never modifies the process environment.

use std::collections::BTreeMap;
use std::path::Path;

use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a `KEY=VALUE` file without exporting anything.
pub fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| dotenv_error(path, e))?;

    let mut values = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| dotenv_error(path, e))?;
        values.insert(key, value);
    }

    tracing::debug!(path = %path.display(), count = values.len(), "Read env file");
    Ok(values)
}

fn dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::LineParse(_, error_index) => ConfigError::EnvFileParse { path, error_index },
        dotenvy::Error::Io(io_err) => ConfigError::EnvFileIo {
            path,
            kind: io_err.kind(),
        },
        _ => ConfigError::EnvFileUnknown { path },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_BIOME_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_BIOME_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }

    #[test]
    fn test_read_env_file_returns_pairs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "FOO=bar\n# comment\nQUOTED=\"two words\"\n").unwrap();

        let values = read_env_file(&path).unwrap();

        assert_eq!(values.get("FOO").map(String::as_str), Some("bar"));
        assert_eq!(values.get("QUOTED").map(String::as_str), Some("two words"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    #[serial]
    fn test_read_env_file_does_not_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "_BIOME_TEST_NOT_EXPORTED=1\n").unwrap();

        temp_env::with_var_unset("_BIOME_TEST_NOT_EXPORTED", || {
            read_env_file(&path).unwrap();
            assert!(std::env::var("_BIOME_TEST_NOT_EXPORTED").is_err());
        });
    }

    #[test]
    fn test_missing_env_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_env_file(&temp_dir.path().join("absent.env"));

        match result {
            Err(ConfigError::EnvFileIo { kind, .. }) => {
                assert_eq!(kind, std::io::ErrorKind::NotFound)
            }
            other => panic!("expected EnvFileIo, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_env_file_does_not_leak_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        let secret_value = "supersecret_token_12345";
        fs::write(&path, format!("TOKEN={}\nINVALID LINE {}", secret_value, secret_value)).unwrap();

        let err = read_env_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::EnvFileParse { .. }));
        assert!(!err.to_string().contains(secret_value));
    }
}
