//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map activation, configuration and client errors to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - The exit status of a program started by `biome run` (passed through as-is).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use biome_client::ClientError;
use biome_config::ConfigError;
use biome_engine::ActivationError;

/// Structured exit codes for biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The requested biome is not defined in any searched file.
    ProfileNotFound = 2,

    /// Malformed profile file, broken inheritance, unknown value
    /// specification, or an unreadable env file.
    InvalidConfig = 3,

    /// AWS profile loading or role assumption failed.
    CredentialFailed = 4,

    /// A variable could not be produced.
    SetterFailed = 5,

    /// A setup command could not start or exited non-zero.
    CommandFailed = 6,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { .. } => ExitCode::ProfileNotFound,
            ConfigError::Export { .. } => ExitCode::GeneralError,
            _ => ExitCode::InvalidConfig,
        }
    }
}

impl From<&ActivationError> for ExitCode {
    fn from(err: &ActivationError) -> Self {
        match err {
            ActivationError::NotLoaded => ExitCode::GeneralError,
            ActivationError::Config(inner) => Self::from(inner),
            ActivationError::Credential { .. } => ExitCode::CredentialFailed,
            ActivationError::EnvFile { .. } => ExitCode::InvalidConfig,
            ActivationError::Setter { .. } => ExitCode::SetterFailed,
            ActivationError::Command { .. } => ExitCode::CommandFailed,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_credential_error() {
            ExitCode::CredentialFailed
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ActivationError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
