//! Credential provisioning.
//!
//! Responsibilities:
//! - Load a named identity, prompt for an MFA token when it needs one,
//!   and assume its role through the `CredentialService`.
//! - Export the resulting bundle as the standard AWS variables.
//!
//! Invariants:
//! - Nothing is retried.
//! - Export happens only after the whole bundle was issued, and only through
//!   `export_credentials`, never as part of `provision`.

use biome_client::{CredentialBundle, CredentialService};
use biome_config::constants::{
    AWS_ACCESS_KEY_ID, AWS_DEFAULT_REGION, AWS_REGION, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN,
};
use secrecy::ExposeSecret;

use crate::environment::{export_variable, validate};
use crate::error::CredentialError;
use crate::prompt::Prompter;

pub struct CredentialProvisioner<'a> {
    service: &'a dyn CredentialService,
    prompter: &'a mut dyn Prompter,
}

impl<'a> CredentialProvisioner<'a> {
    pub fn new(service: &'a dyn CredentialService, prompter: &'a mut dyn Prompter) -> Self {
        Self { service, prompter }
    }

    /// Obtain temporary credentials for `identity_ref`.
    pub fn provision(&mut self, identity_ref: &str) -> Result<CredentialBundle, CredentialError> {
        let identity =
            self.service
                .load_identity(identity_ref)
                .map_err(|source| CredentialError::ProfileLoad {
                    profile: identity_ref.to_string(),
                    source,
                })?;

        let token_code = if identity.mfa_serial.is_some() {
            let label = format!("MFA token for AWS profile '{}'", identity.name);
            let token = self.prompter.prompt(&label, false).map_err(|source| {
                CredentialError::TokenPrompt {
                    profile: identity.name.clone(),
                    source,
                }
            })?;
            Some(token.trim().to_string())
        } else {
            None
        };

        tracing::debug!(profile = %identity.name, mfa = token_code.is_some(), "Assuming role");
        self.service
            .assume_role(&identity, token_code)
            .map_err(|source| CredentialError::Session {
                profile: identity.name.clone(),
                source,
            })
    }
}

/// Export `bundle` as `AWS_*` variables.
pub fn export_credentials(profile: &str, bundle: &CredentialBundle) -> Result<(), CredentialError> {
    let pairs = [
        (AWS_ACCESS_KEY_ID, bundle.access_key_id.as_str()),
        (AWS_SECRET_ACCESS_KEY, bundle.secret_access_key.expose_secret()),
        (AWS_SESSION_TOKEN, bundle.session_token.expose_secret()),
        (AWS_DEFAULT_REGION, bundle.region.as_str()),
        (AWS_REGION, bundle.region.as_str()),
    ];

    let export_error = |reason| CredentialError::Export {
        profile: profile.to_string(),
        reason,
    };

    for (name, value) in &pairs {
        validate(name, value).map_err(export_error)?;
    }
    for (name, value) in pairs {
        export_variable(name, value).map_err(export_error)?;
    }

    tracing::info!(profile = %profile, region = %bundle.region, "AWS credentials configured");
    Ok(())
}
