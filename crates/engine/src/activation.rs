//! Activation orchestrator.
//!
//! Responsibilities:
//! - Hold the collaborators and the loaded profile for one activation.
//! - Run the pipeline: credentials, env file merge, setters, setup commands.
//!
//! Does NOT handle:
//! - Running the target program (the caller does that afterwards).
//!
//! Invariants:
//! - Steps run in a fixed order and the first failure stops the rest.
//! - Declared variables always win over keys from the env file.
//! - In `ExportMode::Immediate` variables exported before a failure stay set;
//!   in `ExportMode::Staged` nothing is exported unless every setter succeeded.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use biome_client::{
    AwsContext, AwsCredentialService, AwsKeyService, AwsSecretStore, ClientError,
    CredentialService, KeyService, SecretStore,
};
use biome_config::{
    ConfiguredEnvironment, ResolvedProfile, SecretPolicy, ValueSpecification, read_env_file,
};

use crate::commands::run_setup_commands;
use crate::credentials::{CredentialProvisioner, export_credentials};
use crate::decrypt::{LocalKey, WildcardDecryptor};
use crate::environment::{export_variable, validate};
use crate::error::{ActivationError, SetterError};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::setters::{Setter, SetterContext};

/// When resolved variables reach the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Export each variable as soon as it is resolved.
    #[default]
    Immediate,
    /// Resolve every variable first, then export them all.
    Staged,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActivationOptions {
    pub secret_policy: SecretPolicy,
    pub export_mode: ExportMode,
}

/// External services an activation may call.
pub struct Collaborators {
    pub secrets: Box<dyn SecretStore>,
    pub credentials: Box<dyn CredentialService>,
    pub keys: Box<dyn KeyService>,
    pub prompter: Box<dyn Prompter>,
    pub local_key: LocalKey,
}

impl Collaborators {
    /// AWS-backed services with terminal prompting and the keyring key.
    pub fn aws() -> Result<Self, ClientError> {
        let context = Arc::new(AwsContext::new()?);
        Ok(Self {
            secrets: Box::new(AwsSecretStore::new(Arc::clone(&context))),
            credentials: Box::new(AwsCredentialService::new(Arc::clone(&context))),
            keys: Box::new(AwsKeyService::new(context)),
            prompter: Box::new(TerminalPrompter),
            local_key: LocalKey::Keyring,
        })
    }
}

/// Runs one biome's activation.
pub struct Orchestrator {
    collaborators: Collaborators,
    options: ActivationOptions,
    profile: Option<ResolvedProfile>,
}

impl Orchestrator {
    pub fn new(collaborators: Collaborators, options: ActivationOptions) -> Self {
        Self {
            collaborators,
            options,
            profile: None,
        }
    }

    /// Load `name` from the default search path.
    pub fn load_from_defaults(&mut self, name: &str) -> Result<&ResolvedProfile, ActivationError> {
        let profile = biome_config::load_from_defaults(name)?;
        Ok(self.load(profile))
    }

    /// Load `name` from one explicit file.
    pub fn load_from_file(
        &mut self,
        name: &str,
        path: &Path,
    ) -> Result<&ResolvedProfile, ActivationError> {
        let profile = biome_config::load_from_file(name, path)?;
        Ok(self.load(profile))
    }

    /// Use an already resolved profile.
    pub fn load(&mut self, profile: ResolvedProfile) -> &ResolvedProfile {
        tracing::debug!(
            profile = %profile.name,
            path = %profile.source_location.display(),
            "Biome loaded"
        );
        self.profile.insert(profile)
    }

    pub fn profile(&self) -> Option<&ResolvedProfile> {
        self.profile.as_ref()
    }

    /// Run the full activation for the loaded profile.
    pub fn activate(&mut self) -> Result<ConfiguredEnvironment, ActivationError> {
        let profile = self.profile.as_ref().ok_or(ActivationError::NotLoaded)?;
        let collaborators = &mut self.collaborators;

        if let Some(identity_ref) = profile.identity_ref.as_deref() {
            let credential_error = |source| ActivationError::Credential {
                profile: profile.name.clone(),
                source,
            };
            let bundle = CredentialProvisioner::new(
                collaborators.credentials.as_ref(),
                collaborators.prompter.as_mut(),
            )
            .provision(identity_ref)
            .map_err(credential_error)?;
            export_credentials(identity_ref, &bundle).map_err(credential_error)?;
        }

        let variables = merged_variables(profile)?;

        let decryptor = WildcardDecryptor::standard(
            collaborators.keys.as_ref(),
            collaborators.secrets.as_ref(),
            &collaborators.local_key,
        );
        let mut context = SetterContext {
            secrets: collaborators.secrets.as_ref(),
            decryptor: &decryptor,
            prompter: collaborators.prompter.as_mut(),
            secret_policy: self.options.secret_policy,
        };
        let environment = run_setters(&variables, &mut context, self.options.export_mode)?;

        let commands =
            run_setup_commands(&profile.setup_commands).map_err(|source| {
                ActivationError::Command {
                    profile: profile.name.clone(),
                    source,
                }
            })?;

        tracing::info!(
            profile = %profile.name,
            variables = environment.len(),
            commands,
            "Biome activated"
        );
        Ok(environment)
    }
}

/// Declared variables plus env file keys that are not declared.
fn merged_variables(
    profile: &ResolvedProfile,
) -> Result<BTreeMap<String, ValueSpecification>, ActivationError> {
    let mut variables = profile.variables.clone();

    if let Some(env_file) = profile.external_env_file.as_deref() {
        let values = read_env_file(Path::new(env_file)).map_err(|source| {
            ActivationError::EnvFile {
                profile: profile.name.clone(),
                source,
            }
        })?;

        for (key, value) in values {
            variables
                .entry(key)
                .or_insert(ValueSpecification::Literal(value));
        }
    }

    Ok(variables)
}

fn run_setters(
    variables: &BTreeMap<String, ValueSpecification>,
    context: &mut SetterContext<'_>,
    mode: ExportMode,
) -> Result<ConfiguredEnvironment, ActivationError> {
    let setter_error = |variable: &str, source| ActivationError::Setter {
        variable: variable.to_string(),
        source,
    };

    let mut environment = ConfiguredEnvironment::new();
    for (name, spec) in variables {
        let setter = Setter::dispatch(spec);
        tracing::debug!(variable = %name, kind = setter.kind(), "Setting variable");

        let value = match mode {
            ExportMode::Immediate => setter.materialize(name, context),
            ExportMode::Staged => setter.resolve(name, context).and_then(|value| {
                validate(name, &value).map_err(SetterError::Export)?;
                Ok(value)
            }),
        }
        .map_err(|source| setter_error(name, source))?;

        environment.insert(name.clone(), value);
    }

    if mode == ExportMode::Staged {
        for (name, value) in environment.iter() {
            export_variable(name, value)
                .map_err(|reason| setter_error(name, SetterError::Export(reason)))?;
        }
    }

    Ok(environment)
}
