//! Setter strategies and their dispatcher.
//!
//! Responsibilities:
//! - Select the strategy for a decoded `ValueSpecification`.
//! - Produce the variable's value and, on `materialize`, export it.
//!
//! Does NOT handle:
//! - Decoding raw declarations; shapes are checked once during resolution,
//!   so dispatch here is a plain match.
//! - Ordering across variables (see `activation`).
//!
//! Invariants:
//! - A failed setter exports nothing.
//! - Resolved values are never logged.

mod encrypted;
mod literal;
mod prompt;
mod secret;

use biome_client::SecretStore;
use biome_config::{SecretPolicy, ValueSpecification};

use crate::decrypt::WildcardDecryptor;
use crate::environment::export_variable;
use crate::error::SetterError;
use crate::prompt::Prompter;

/// Collaborators available to setters during one activation.
pub struct SetterContext<'a> {
    pub secrets: &'a dyn SecretStore,
    pub decryptor: &'a WildcardDecryptor<'a>,
    pub prompter: &'a mut dyn Prompter,
    pub secret_policy: SecretPolicy,
}

/// The strategy chosen for one variable.
#[derive(Debug, Clone, Copy)]
pub enum Setter<'a> {
    Literal(&'a str),
    Secret {
        secret_id: &'a str,
        json_key: Option<&'a str>,
    },
    Prompt {
        masked: bool,
    },
    Encrypted(&'a str),
}

impl<'a> Setter<'a> {
    /// Pick the strategy for `spec`.
    pub fn dispatch(spec: &'a ValueSpecification) -> Self {
        match spec {
            ValueSpecification::Literal(value) => Self::Literal(value),
            ValueSpecification::SecretReference {
                secret_id,
                json_key,
            } => Self::Secret {
                secret_id,
                json_key: json_key.as_deref(),
            },
            ValueSpecification::InteractivePrompt { masked } => Self::Prompt { masked: *masked },
            ValueSpecification::EncryptedPayload { ciphertext } => Self::Encrypted(ciphertext),
        }
    }

    /// Produce the value for `variable` without exporting it.
    pub fn resolve(
        &self,
        variable: &str,
        context: &mut SetterContext<'_>,
    ) -> Result<String, SetterError> {
        match *self {
            Self::Literal(value) => Ok(literal::resolve(value)),
            Self::Secret {
                secret_id,
                json_key,
            } => secret::resolve(
                context.secrets,
                secret_id,
                json_key,
                context.secret_policy,
            ),
            Self::Prompt { masked } => prompt::resolve(context.prompter, variable, masked),
            Self::Encrypted(ciphertext) => encrypted::resolve(context.decryptor, ciphertext),
        }
    }

    /// Produce the value for `variable` and export it to the process environment.
    pub fn materialize(
        &self,
        variable: &str,
        context: &mut SetterContext<'_>,
    ) -> Result<String, SetterError> {
        let value = self.resolve(variable, context)?;
        export_variable(variable, &value).map_err(SetterError::Export)?;
        Ok(value)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Secret { .. } => "secret",
            Self::Prompt { .. } => "prompt",
            Self::Encrypted(_) => "encrypted",
        }
    }
}
