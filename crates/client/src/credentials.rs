//! Temporary credentials from an assumed role.
//!
//! Responsibilities:
//! - Define the `CredentialService` collaborator and the `CredentialBundle` it issues.
//! - Implement it with the shared config file and STS `AssumeRole`.
//!
//! Does NOT handle:
//! - Prompting for MFA tokens (the caller supplies the token code).
//! - Exporting credentials to the environment (see the engine crate).
//!
//! Invariants:
//! - No call is retried; one failed assumption is one error.
//! - Secret parts of the bundle are only reachable through `ExposeSecret`.

use std::sync::Arc;

use aws_sdk_sts::error::DisplayErrorContext;
use secrecy::SecretString;

use crate::context::AwsContext;
use crate::error::{ClientError, Result};
use crate::identity::{IdentityProfile, load_identity, shared_config_path};

/// Short-lived credentials for one assumed role.
#[derive(Debug)]
pub struct CredentialBundle {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
    pub session_token: SecretString,
    pub region: String,
}

/// Issues temporary credentials for a named identity.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait CredentialService {
    /// Read the named identity's settings.
    fn load_identity(&self, name: &str) -> Result<IdentityProfile>;

    /// Assume the identity's role, passing `token_code` when MFA is required.
    fn assume_role(
        &self,
        identity: &IdentityProfile,
        token_code: Option<String>,
    ) -> Result<CredentialBundle>;
}

/// `CredentialService` backed by the AWS shared config file and STS.
#[derive(Debug)]
pub struct AwsCredentialService {
    context: Arc<AwsContext>,
}

impl AwsCredentialService {
    pub fn new(context: Arc<AwsContext>) -> Self {
        Self { context }
    }
}

impl CredentialService for AwsCredentialService {
    fn load_identity(&self, name: &str) -> Result<IdentityProfile> {
        let path = shared_config_path()?;
        tracing::debug!(profile = %name, path = %path.display(), "Loading AWS profile");
        load_identity(&path, name)
    }

    fn assume_role(
        &self,
        identity: &IdentityProfile,
        token_code: Option<String>,
    ) -> Result<CredentialBundle> {
        let session_error = |message: String| ClientError::Session {
            profile: identity.name.clone(),
            message,
        };

        let config = self
            .context
            .config_for(identity.source_profile.as_deref(), &identity.region);
        let client = aws_sdk_sts::Client::new(&config);

        let request = client
            .assume_role()
            .role_arn(&identity.role_arn)
            .role_session_name(session_name(&identity.name))
            .set_serial_number(identity.mfa_serial.clone())
            .set_token_code(token_code);

        let output = self
            .context
            .block_on(request.send())
            .map_err(|e| session_error(DisplayErrorContext(&e).to_string()))?;

        let credentials = output
            .credentials()
            .ok_or_else(|| session_error("response contained no credentials".to_string()))?;

        tracing::debug!(profile = %identity.name, "Assumed role");
        Ok(CredentialBundle {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: SecretString::from(credentials.secret_access_key().to_string()),
            session_token: SecretString::from(credentials.session_token().to_string()),
            region: identity.region.clone(),
        })
    }
}

/// STS session name: `biome-<profile>`, restricted to `[\w+=,.@-]` and 64 chars.
fn session_name(profile: &str) -> String {
    format!("biome-{profile}")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || "_+=,.@-".contains(c) {
                c
            } else {
                '-'
            }
        })
        .take(64)
        .collect()
}
