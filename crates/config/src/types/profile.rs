//! Profile record types.
//!
//! Responsibilities:
//! - Define `ProfileRecord`, one YAML document of a profile file.
//! - Define `ResolvedProfile`, the inheritance-merged result handed to activation.
//!
//! Invariants:
//! - A record with an empty `Name` is never indexed.
//! - Empty optional strings (`aws_profile: ""`) are treated as absent.
//! - `ResolvedProfile::variables` holds decoded specifications only.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::value::ValueSpecification;

/// One named configuration unit, as declared in a profile file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    /// Named AWS profile whose role is assumed before anything else runs
    #[serde(rename = "aws_profile", skip_serializing_if = "Option::is_none")]
    pub identity_ref: Option<String>,
    #[serde(rename = "commands")]
    pub setup_commands: Vec<String>,
    /// Path to a dotenv file merged under the declared variables
    #[serde(rename = "load_env", skip_serializing_if = "Option::is_none")]
    pub external_env_file: Option<String>,
    /// Raw declarations; decoded into `ValueSpecification` after merging
    #[serde(rename = "environment")]
    pub variables: BTreeMap<String, serde_yaml::Value>,
    #[serde(rename = "inherit_from", skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<String>,
}

impl ProfileRecord {
    pub fn identity_ref(&self) -> Option<&str> {
        non_empty(self.identity_ref.as_deref())
    }

    pub fn external_env_file(&self) -> Option<&str> {
        non_empty(self.external_env_file.as_deref())
    }

    pub fn parent_ref(&self) -> Option<&str> {
        non_empty(self.parent_ref.as_deref())
    }
}

/// A profile with its inheritance chain applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProfile {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "aws_profile", skip_serializing_if = "Option::is_none")]
    pub identity_ref: Option<String>,
    #[serde(rename = "commands")]
    pub setup_commands: Vec<String>,
    #[serde(rename = "load_env", skip_serializing_if = "Option::is_none")]
    pub external_env_file: Option<String>,
    #[serde(rename = "environment")]
    pub variables: BTreeMap<String, ValueSpecification>,
    /// File the requested profile was found in
    #[serde(skip)]
    pub source_location: PathBuf,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
