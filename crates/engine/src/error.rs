//! Error types for activation.
//!
//! Invariants:
//! - Every variant names the profile, variable, secret or command it concerns.
//! - No variant carries a resolved value.

use biome_client::ClientError;
use biome_config::{ConfigError, EncryptionError, EnvelopeError};
use thiserror::Error;

/// Failure producing one variable's value.
#[derive(Error, Debug)]
pub enum SetterError {
    #[error("no secret_arn was provided")]
    MissingSecretId,

    #[error("unable to fetch secret '{secret_id}'")]
    Store {
        secret_id: String,
        #[source]
        source: ClientError,
    },

    #[error("secret '{secret_id}' is not a string payload")]
    NotAString { secret_id: String },

    #[error("secret '{secret_id}' is not a JSON object")]
    NotJson { secret_id: String },

    #[error(
        "secret '{secret_id}' has no secret_json_key; set one or allow plain secrets to use the whole value"
    )]
    JsonKeyRequired { secret_id: String },

    #[error("unable to find secret key '{key}' in secret '{secret_id}'")]
    MissingJsonKey { secret_id: String, key: String },

    #[error("secret key '{key}' in secret '{secret_id}' is not a string, number or boolean")]
    NonScalarValue { secret_id: String, key: String },

    #[error("failed to read input")]
    Prompt(#[source] std::io::Error),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),

    #[error("cannot export variable: {0}")]
    Export(&'static str),
}

/// Failure decrypting an `ENC[...]` value.
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("no decryption technique applies to the value")]
    NoTechniqueApplies,

    #[error("malformed encrypted value")]
    Envelope(#[from] EnvelopeError),

    #[error("unable to unwrap data key")]
    KeyService(#[source] ClientError),

    #[error("unable to fetch encryption key '{secret_id}'")]
    KeySecret {
        secret_id: String,
        #[source]
        source: ClientError,
    },

    #[error("unable to decrypt value")]
    Cipher(#[from] EncryptionError),

    #[error("decrypted value is not valid UTF-8")]
    NotUtf8,
}

/// Failure producing an `ENC[...]` value.
#[derive(Error, Debug)]
pub enum EncryptError {
    #[error("unable to generate a data key under '{key_id}'")]
    KeyService {
        key_id: String,
        #[source]
        source: ClientError,
    },

    #[error("unable to fetch encryption key '{secret_id}'")]
    KeySecret {
        secret_id: String,
        #[source]
        source: ClientError,
    },

    #[error("unable to encrypt value")]
    Cipher(#[from] EncryptionError),
}

/// Failure establishing temporary credentials.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("unable to load AWS profile '{profile}'")]
    ProfileLoad {
        profile: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to read MFA token for AWS profile '{profile}'")]
    TokenPrompt {
        profile: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to start a session for AWS profile '{profile}'")]
    Session {
        profile: String,
        #[source]
        source: ClientError,
    },

    #[error("cannot export credentials for AWS profile '{profile}': {reason}")]
    Export {
        profile: String,
        reason: &'static str,
    },
}

/// Failure running a setup command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("setup command {index} is empty")]
    Empty { index: usize },

    #[error("failed to start '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}", code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    Failed { command: String, code: Option<i32> },
}

/// Failure of a whole activation.
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("no biome has been loaded")]
    NotLoaded,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unable to configure AWS credentials for biome '{profile}'")]
    Credential {
        profile: String,
        #[source]
        source: CredentialError,
    },

    #[error("unable to load env file for biome '{profile}'")]
    EnvFile {
        profile: String,
        #[source]
        source: ConfigError,
    },

    #[error("failed to set variable '{variable}'")]
    Setter {
        variable: String,
        #[source]
        source: SetterError,
    },

    #[error("setup command failed for biome '{profile}'")]
    Command {
        profile: String,
        #[source]
        source: CommandError,
    },
}
