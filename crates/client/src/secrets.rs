//! Secret store collaborator.
//!
//! Responsibilities:
//! - Define `SecretStore`: fetch one secret's string payload by identifier.
//! - Implement it with AWS Secrets Manager `GetSecretValue`.
//!
//! Does NOT handle:
//! - Interpreting the payload as JSON (see the engine's secret setter).
//!
//! Invariants:
//! - Missing secrets map to `SecretNotFound`, permission failures to `AccessDenied`.
//! - Payloads are never logged.

use std::sync::Arc;

use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;

use crate::context::AwsContext;
use crate::error::{ClientError, Result};

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// Fetches secret strings by identifier (name or ARN).
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait SecretStore {
    fn get_secret_string(&self, id: &str) -> Result<String>;
}

/// `SecretStore` backed by AWS Secrets Manager.
#[derive(Debug)]
pub struct AwsSecretStore {
    context: Arc<AwsContext>,
}

impl AwsSecretStore {
    pub fn new(context: Arc<AwsContext>) -> Self {
        Self { context }
    }
}

impl SecretStore for AwsSecretStore {
    fn get_secret_string(&self, id: &str) -> Result<String> {
        let client = aws_sdk_secretsmanager::Client::new(self.context.default_config());

        tracing::debug!(secret = %id, "Fetching secret");
        let output = self
            .context
            .block_on(client.get_secret_value().secret_id(id).send())
            .map_err(|e| map_error(id, e))?;

        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| ClientError::NotAString(id.to_string()))
    }
}

fn map_error<R>(id: &str, err: SdkError<GetSecretValueError, R>) -> ClientError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let message = DisplayErrorContext(&err).to_string();
    let service_error = err.into_service_error();

    if service_error.is_resource_not_found_exception() {
        ClientError::SecretNotFound(id.to_string())
    } else if service_error.code() == Some(ACCESS_DENIED_CODE) {
        ClientError::AccessDenied(format!("secret '{id}'"))
    } else {
        ClientError::SecretStore {
            id: id.to_string(),
            message,
        }
    }
}
