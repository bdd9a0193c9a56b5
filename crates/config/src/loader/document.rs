//! Multi-document profile file parsing.
//!
//! Responsibilities:
//! - Split a file into YAML documents and decode each into a `ProfileRecord`.
//! - Index records by name for inheritance lookups.
//!
//! Invariants:
//! - The first malformed document fails the whole file; nothing is skipped silently.
//! - Empty documents and records without a name are not indexed.
//! - A later document with a duplicate name replaces the earlier one.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;
use crate::types::ProfileRecord;

/// Records of one file, keyed by name.
pub(crate) type ProfileIndex = HashMap<String, ProfileRecord>;

pub(crate) fn index_documents(path: &Path, contents: &str) -> Result<ProfileIndex, ConfigError> {
    let mut index = ProfileIndex::new();

    for (i, document) in serde_yaml::Deserializer::from_str(contents).enumerate() {
        let number = i + 1;
        let parse_error = |source| ConfigError::Parse {
            path: path.to_path_buf(),
            document: number,
            source,
        };

        let value = serde_yaml::Value::deserialize(document).map_err(parse_error)?;
        if value.is_null() {
            continue;
        }

        let record: ProfileRecord = serde_yaml::from_value(value).map_err(parse_error)?;
        if record.name.trim().is_empty() {
            tracing::debug!(path = %path.display(), document = number, "Skipping document without a name");
            continue;
        }

        let name = record.name.clone();
        if index.insert(name.clone(), record).is_some() {
            tracing::warn!(
                path = %path.display(),
                profile = %name,
                document = number,
                "Duplicate biome name, later document wins"
            );
        }
    }

    Ok(index)
}
