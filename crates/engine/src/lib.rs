//! Activation engine for biome.
//!
//! Takes a resolved profile and turns it into a configured process
//! environment: AWS credentials first, then the env file merge, then one
//! setter per variable, then the setup commands.

pub mod activation;
pub mod commands;
pub mod credentials;
pub mod decrypt;
pub mod encrypt;
pub mod environment;
pub mod error;
pub mod prompt;
pub mod setters;

pub use activation::{ActivationOptions, Collaborators, ExportMode, Orchestrator};
pub use commands::run_setup_commands;
pub use credentials::{CredentialProvisioner, export_credentials};
pub use decrypt::{Decryptor, LocalKey, WildcardDecryptor};
pub use encrypt::{seal_with_key_service, seal_with_local_key, seal_with_secret_key};
pub use environment::export_variable;
pub use error::{
    ActivationError, CommandError, CredentialError, DecryptError, EncryptError, SetterError,
};
pub use prompt::{Prompter, ReaderPrompter, TerminalPrompter};
pub use setters::{Setter, SetterContext};
