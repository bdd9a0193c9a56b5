//! External collaborators of the biome activation pipeline.
//!
//! Each collaborator is a trait the engine depends on, with an AWS-backed
//! implementation: a secret store (Secrets Manager), a credential service
//! (shared config file + STS) and a key service (KMS). The AWS clients are
//! async; `AwsContext` drives them from the synchronous pipeline.
//!
//! Mock implementations are generated with `mockall` for tests and, through
//! the `test-utils` feature, for dependent crates.

mod context;
pub mod credentials;
pub mod error;
pub mod identity;
pub mod keys;
pub mod secrets;

pub use context::AwsContext;
pub use credentials::{AwsCredentialService, CredentialBundle, CredentialService};
pub use error::{ClientError, Result};
pub use identity::{IdentityProfile, load_identity, parse_identity, shared_config_path};
pub use keys::{AwsKeyService, DataKey, KeyService};
pub use secrets::{AwsSecretStore, SecretStore};

#[cfg(any(test, feature = "test-utils"))]
pub use credentials::MockCredentialService;
#[cfg(any(test, feature = "test-utils"))]
pub use keys::MockKeyService;
#[cfg(any(test, feature = "test-utils"))]
pub use secrets::MockSecretStore;
