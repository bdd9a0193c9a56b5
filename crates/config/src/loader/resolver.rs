//! Profile resolution: search path walk and inheritance merging.
//!
//! Responsibilities:
//! - Find the first file on the search path that declares the requested biome.
//! - Follow `inherit_from` through that file's records and merge the chain.
//! - Decode the merged variables into value specifications.
//!
//! Does NOT handle:
//! - Building the search path (see `search`).
//! - Splitting a file into records (see `document`).
//!
//! Invariants:
//! - Only access failures (absent, unreadable) move on to the next file.
//!   Encoding, parse, inheritance and specification errors always surface.
//! - The inheritance universe is the file the profile was found in.
//! - Merging is first-writer-wins, walking nearest ancestor first.

use std::collections::{BTreeMap, HashSet};
use std::io::ErrorKind;
use std::path::Path;

use super::document::{ProfileIndex, index_documents};
use super::error::ConfigError;
use super::search::SearchPath;
use crate::types::{ProfileRecord, ResolvedProfile, ValueSpecification};

/// Resolve `name` against every file of `search`, in order.
pub fn find_profile(name: &str, search: &SearchPath) -> Result<ResolvedProfile, ConfigError> {
    for path in search.iter() {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No biome file, trying next location");
                continue;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unable to read biome file, trying next location");
                continue;
            }
        };
        let contents = String::from_utf8(bytes).map_err(|source| ConfigError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        let index = index_documents(path, &contents)?;
        match index.get(name) {
            Some(record) => {
                tracing::debug!(profile = %name, path = %path.display(), "Found biome");
                return resolve(record, &index, path);
            }
            None => {
                tracing::debug!(profile = %name, path = %path.display(), "Biome not declared in file");
            }
        }
    }

    Err(ConfigError::ProfileNotFound {
        name: name.to_string(),
        searched: search.paths().to_vec(),
    })
}

/// Resolve `name` using the default search path.
pub fn load_from_defaults(name: &str) -> Result<ResolvedProfile, ConfigError> {
    find_profile(name, &SearchPath::defaults())
}

/// Resolve `name` from one explicit file.
pub fn load_from_file(name: &str, path: &Path) -> Result<ResolvedProfile, ConfigError> {
    find_profile(name, &SearchPath::single(path))
}

fn resolve(
    record: &ProfileRecord,
    index: &ProfileIndex,
    path: &Path,
) -> Result<ResolvedProfile, ConfigError> {
    let mut merged = record.clone();
    let mut chain = vec![record.name.clone()];
    let mut seen: HashSet<&str> = HashSet::from([record.name.as_str()]);
    let mut current = record;

    while let Some(parent_name) = current.parent_ref() {
        chain.push(parent_name.to_string());
        if !seen.insert(parent_name) {
            return Err(ConfigError::CircularInheritance { chain });
        }

        let parent = index
            .get(parent_name)
            .ok_or_else(|| ConfigError::MissingParent {
                profile: current.name.clone(),
                parent: parent_name.to_string(),
                path: path.to_path_buf(),
            })?;

        merge_ancestor(&mut merged, parent);
        current = parent;
    }

    if chain.len() > 1 {
        tracing::debug!(profile = %record.name, chain = %chain.join(" -> "), "Applied inheritance chain");
    }

    decode(merged, path)
}

/// Apply one ancestor under everything merged so far.
fn merge_ancestor(merged: &mut ProfileRecord, ancestor: &ProfileRecord) {
    if merged.identity_ref().is_none() {
        merged.identity_ref = ancestor.identity_ref().map(str::to_string);
    }

    if merged.external_env_file().is_none() {
        merged.external_env_file = ancestor.external_env_file().map(str::to_string);
    }

    for (key, value) in &ancestor.variables {
        merged
            .variables
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    // Farther ancestors are visited later, so prepending puts the root first.
    let own = std::mem::take(&mut merged.setup_commands);
    merged.setup_commands = ancestor.setup_commands.iter().cloned().chain(own).collect();
}

fn decode(record: ProfileRecord, path: &Path) -> Result<ResolvedProfile, ConfigError> {
    let identity_ref = record.identity_ref().map(str::to_string);
    let external_env_file = record.external_env_file().map(str::to_string);

    let variables: BTreeMap<String, ValueSpecification> = record
        .variables
        .iter()
        .map(|(key, value)| {
            ValueSpecification::from_declared(key, value).map(|spec| (key.clone(), spec))
        })
        .collect::<Result<_, _>>()
        .map_err(|source| ConfigError::UnknownSpecification {
            profile: record.name.clone(),
            source,
        })?;

    Ok(ResolvedProfile {
        name: record.name,
        identity_ref,
        setup_commands: record.setup_commands,
        external_env_file,
        variables,
        source_location: path.to_path_buf(),
    })
}
