//! Error types for profile loading.
//!
//! Responsibilities:
//! - Define error variants for profile discovery, parsing, inheritance, and
//!   specification decoding.
//! - Define error variants for reading external dotenv files and writing exports.
//!
//! Invariants:
//! - All error variants include context for debugging (profile names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::UnknownSpecification;

/// Errors that can occur while resolving a profile.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to locate the '{name}' biome ({} file(s) searched)", searched.len())]
    ProfileNotFound { name: String, searched: Vec<PathBuf> },

    #[error("Biome file {path} is not valid UTF-8")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse document {document} of {path}")]
    Parse {
        path: PathBuf,
        document: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("can not find biome '{parent}' inherited by '{profile}' in {path}")]
    MissingParent {
        profile: String,
        parent: String,
        path: PathBuf,
    },

    #[error("circular biome inheritance found: {}", chain.join(" -> "))]
    CircularInheritance { chain: Vec<String> },

    #[error("invalid biome '{profile}'")]
    UnknownSpecification {
        profile: String,
        #[source]
        source: UnknownSpecification,
    },

    /// Failed to read the external env file due to an I/O error.
    #[error("Failed to read env file {path}: {kind}")]
    EnvFileIo { path: PathBuf, kind: ErrorKind },

    /// Failed to parse the external env file.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse env file {path} at position {error_index}")]
    EnvFileParse { path: PathBuf, error_index: usize },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load env file {path}")]
    EnvFileUnknown { path: PathBuf },

    #[error("Failed to write environment to {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// True for missing or cyclic parents.
    pub fn is_inheritance(&self) -> bool {
        matches!(
            self,
            Self::MissingParent { .. } | Self::CircularInheritance { .. }
        )
    }
}
