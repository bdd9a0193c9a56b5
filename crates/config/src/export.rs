//! Writing a configured environment to a dotenv file.
//!
//! Responsibilities:
//! - Render `ConfiguredEnvironment` as `KEY=VALUE` lines, sorted by key.
//! - Quote values that are not plain tokens so `dotenvy` reads them back unchanged.
//! - Replace the target file atomically.
//!
//! Invariants:
//! - Written values are never logged.
//! - A failed write leaves any existing target file untouched.

use std::path::Path;

use crate::loader::ConfigError;
use crate::types::ConfiguredEnvironment;

/// Write `environment` to `path` in dotenv format.
pub fn write_dotenv(environment: &ConfiguredEnvironment, path: &Path) -> Result<(), ConfigError> {
    let export_error = |source| ConfigError::Export {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(export_error)?;
    }

    let content = render(environment);

    // Write to a temporary file first
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);
    std::fs::write(&temp_path, content).map_err(export_error)?;

    // Atomically rename the temporary file to the target path
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(export_error(e));
    }

    tracing::debug!(
        path = %path.display(),
        count = environment.len(),
        "Environment written"
    );
    Ok(())
}

fn render(environment: &ConfiguredEnvironment) -> String {
    environment
        .iter()
        .map(|(key, value)| format!("{key}={}\n", quote(value)))
        .collect()
}

fn quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_./:@+,-".contains(c));
    if plain {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
