//! AWS shared config profiles.
//!
//! Responsibilities:
//! - Locate the shared config file (`AWS_CONFIG_FILE`, else `~/.aws/config`).
//! - Read the role, region and MFA settings of a named profile.
//!
//! Invariants:
//! - `default` is read from the `[default]` section, every other name from
//!   `[profile NAME]`.
//! - A profile without `role_arn` cannot be assumed and is an error.
//! - A profile without `region` takes the `[default]` region; with neither
//!   it is an error.

use std::path::{Path, PathBuf};

use biome_config::constants::AWS_CONFIG_FILE_ENV;
use biome_config::env_var_or_none;
use ini::Ini;

use crate::error::{ClientError, Result};

/// The parts of a shared config profile needed to assume its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    pub name: String,
    pub region: String,
    pub role_arn: String,
    pub mfa_serial: Option<String>,
    /// Profile whose credentials call STS; the default chain when absent
    pub source_profile: Option<String>,
}

/// Location of the AWS shared config file.
pub fn shared_config_path() -> Result<PathBuf> {
    if let Some(path) = env_var_or_none(AWS_CONFIG_FILE_ENV) {
        return Ok(PathBuf::from(path));
    }

    directories::BaseDirs::new()
        .map(|base| base.home_dir().join(".aws").join("config"))
        .ok_or_else(|| ClientError::SharedConfig {
            path: PathBuf::from("~/.aws/config"),
            message: "home directory unavailable".to_string(),
        })
}

/// Read profile `name` from the shared config file at `path`.
pub fn load_identity(path: &Path, name: &str) -> Result<IdentityProfile> {
    let ini = Ini::load_from_file(path).map_err(|e| ClientError::SharedConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_identity(&ini, name)
}

/// Extract profile `name` from parsed shared config contents.
pub fn parse_identity(ini: &Ini, name: &str) -> Result<IdentityProfile> {
    let section_name = if name == "default" {
        "default".to_string()
    } else {
        format!("profile {name}")
    };

    let load_error = |reason: &str| ClientError::ProfileLoad {
        profile: name.to_string(),
        reason: reason.to_string(),
    };

    let section = ini
        .section(Some(section_name.as_str()))
        .ok_or_else(|| load_error("profile not found in shared config"))?;

    let field = |key: &str| section_value(section, key);

    let role_arn = field("role_arn").ok_or_else(|| load_error("missing role_arn"))?;
    let region = field("region")
        .or_else(|| {
            ini.section(Some("default"))
                .and_then(|default| section_value(default, "region"))
        })
        .ok_or_else(|| load_error("missing region"))?;

    Ok(IdentityProfile {
        name: name.to_string(),
        region,
        role_arn,
        mfa_serial: field("mfa_serial"),
        source_profile: field("source_profile"),
    })
}

fn section_value(section: &ini::Properties, key: &str) -> Option<String> {
    section
        .get(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
