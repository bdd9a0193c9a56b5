//! Biome profile configuration.
//!
//! This crate provides the profile data model, the resolver that finds a
//! named biome on the search path and applies its inheritance chain, the
//! encrypted-value envelope format, and dotenv import/export helpers.

pub mod constants;
pub mod encryption;
pub mod envelope;
pub mod export;
mod loader;
pub mod types;

pub use encryption::{EncryptionError, Encryptor, MasterKey};
pub use envelope::{Envelope, EnvelopeError, Technique};
pub use export::write_dotenv;
pub use loader::{
    ConfigError, SearchPath, env_var_or_none, find_profile, load_from_defaults, load_from_file,
    read_env_file,
};
pub use types::{
    ConfiguredEnvironment, ProfileRecord, ResolvedProfile, SecretPolicy, ValueSpecification,
};
