//! Error types for the AWS collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to AWS or reading its shared config.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The secret does not exist.
    #[error("Secret not found: {0}")]
    SecretNotFound(String),

    /// The caller is not allowed to read the resource.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The secret exists but holds binary data.
    #[error("Secret '{0}' is not a string payload")]
    NotAString(String),

    /// Any other Secrets Manager failure.
    #[error("Secrets Manager error for '{id}': {message}")]
    SecretStore { id: String, message: String },

    /// The shared config file could not be read.
    #[error("Failed to read AWS config file {path}: {message}")]
    SharedConfig { path: PathBuf, message: String },

    /// The named profile is absent or incomplete.
    #[error("Unable to load AWS profile '{profile}': {reason}")]
    ProfileLoad { profile: String, reason: String },

    /// Role assumption failed.
    #[error("Unable to assume role for AWS profile '{profile}': {message}")]
    Session { profile: String, message: String },

    /// Any KMS failure.
    #[error("KMS error: {0}")]
    KeyService(String),

    /// A response was missing a required field.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The async runtime driving the SDK could not be created.
    #[error("Failed to start async runtime: {0}")]
    Runtime(String),
}

impl ClientError {
    /// True when the requested secret or key does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SecretNotFound(_))
    }

    /// True when credentials were valid but lacked permission.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied(_))
    }

    /// True for failures loading or using an identity.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::SharedConfig { .. } | Self::ProfileLoad { .. } | Self::Session { .. }
        )
    }
}
