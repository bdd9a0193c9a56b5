//! Values read from the secret store.
//!
//! Invariants:
//! - With a JSON key, the secret must be a JSON object holding that key.
//! - Without one, the whole secret is used only under `SecretPolicy::AllowPlain`.
//! - String members are taken verbatim; numbers and booleans as text.

use biome_client::SecretStore;
use biome_config::SecretPolicy;
use serde_json::{Map, Value};

use crate::error::SetterError;

pub(super) fn resolve(
    store: &dyn SecretStore,
    secret_id: &str,
    json_key: Option<&str>,
    policy: SecretPolicy,
) -> Result<String, SetterError> {
    if secret_id.trim().is_empty() {
        return Err(SetterError::MissingSecretId);
    }

    if json_key.is_none() && policy == SecretPolicy::RequireJsonKey {
        return Err(SetterError::JsonKeyRequired {
            secret_id: secret_id.to_string(),
        });
    }

    tracing::debug!(secret = %secret_id, "Resolving secret reference");
    let payload = store
        .get_secret_string(secret_id)
        .map_err(|source| SetterError::Store {
            secret_id: secret_id.to_string(),
            source,
        })?;

    if payload.is_empty() {
        return Err(SetterError::NotAString {
            secret_id: secret_id.to_string(),
        });
    }

    match json_key {
        Some(key) => select_key(secret_id, &payload, key),
        None => Ok(payload),
    }
}

fn select_key(secret_id: &str, payload: &str, key: &str) -> Result<String, SetterError> {
    let members: Map<String, Value> =
        serde_json::from_str(payload).map_err(|_| SetterError::NotJson {
            secret_id: secret_id.to_string(),
        })?;

    match members.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(SetterError::NonScalarValue {
            secret_id: secret_id.to_string(),
            key: key.to_string(),
        }),
        None => Err(SetterError::MissingJsonKey {
            secret_id: secret_id.to_string(),
            key: key.to_string(),
        }),
    }
}
