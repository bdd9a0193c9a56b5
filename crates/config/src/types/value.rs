//! Value specifications for profile variables.
//!
//! Responsibilities:
//! - Decode a raw YAML declaration into a closed `ValueSpecification`.
//! - Apply the fixed dispatch priority: secret reference, encrypted payload,
//!   interactive prompt, then literal.
//!
//! Invariants:
//! - Scalars always decode to `Literal`; `null` becomes the empty string.
//! - A mapping with none of the recognised keys is an `UnknownSpecification`.
//! - Recognised keys are type-checked; a wrong type names the key.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Number, Value};
use thiserror::Error;

use crate::constants::{
    ENCRYPTED_KEY, PROMPT_KEY, PROMPT_SECRET_KEY, SECRET_ARN_KEY, SECRET_JSON_KEY,
};

/// How a variable's value is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSpecification {
    /// A fixed value, already in its string form.
    Literal(String),
    /// A secret-store lookup, optionally selecting one key of a JSON secret.
    SecretReference {
        secret_id: String,
        json_key: Option<String>,
    },
    /// Read from standard input at activation time.
    InteractivePrompt { masked: bool },
    /// An `ENC[...]` envelope decrypted at activation time.
    EncryptedPayload { ciphertext: String },
}

/// Whether a secret reference without `secret_json_key` is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretPolicy {
    /// Every secret reference must select a JSON key.
    #[default]
    RequireJsonKey,
    /// A reference without a JSON key uses the whole secret string.
    AllowPlain,
}

/// A declaration whose shape matches no value specification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown environment config for variable '{variable}': {reason}")]
pub struct UnknownSpecification {
    pub variable: String,
    pub reason: String,
}

impl ValueSpecification {
    /// Decode the declaration of `variable`.
    pub fn from_declared(variable: &str, value: &Value) -> Result<Self, UnknownSpecification> {
        let unknown = |reason: String| UnknownSpecification {
            variable: variable.to_string(),
            reason,
        };

        match value {
            Value::Null => Ok(Self::Literal(String::new())),
            Value::Bool(b) => Ok(Self::Literal(b.to_string())),
            Value::Number(n) => Ok(Self::Literal(number_literal(n))),
            Value::String(s) => Ok(Self::Literal(s.clone())),
            Value::Sequence(_) => Err(unknown("sequences are not supported".to_string())),
            Value::Tagged(_) => Err(unknown("tagged values are not supported".to_string())),
            Value::Mapping(mapping) => decode_structured(mapping).map_err(unknown),
        }
    }

    /// Short name of the strategy this specification selects.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::SecretReference { .. } => "secret",
            Self::InteractivePrompt { .. } => "prompt",
            Self::EncryptedPayload { .. } => "encrypted",
        }
    }
}

/// Integers verbatim; floats in shortest decimal form, so `8080.0` is `8080`.
fn number_literal(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn decode_structured(mapping: &Mapping) -> Result<ValueSpecification, String> {
    if let Some(value) = mapping.get(SECRET_ARN_KEY) {
        let secret_id = string_field(SECRET_ARN_KEY, value)?;
        let json_key = mapping
            .get(SECRET_JSON_KEY)
            .map(|v| string_field(SECRET_JSON_KEY, v))
            .transpose()?;
        return Ok(ValueSpecification::SecretReference {
            secret_id,
            json_key,
        });
    }

    if let Some(value) = mapping.get(ENCRYPTED_KEY) {
        let ciphertext = string_field(ENCRYPTED_KEY, value)?;
        return Ok(ValueSpecification::EncryptedPayload { ciphertext });
    }

    if let Some(value) = mapping.get(PROMPT_KEY)
        && bool_field(PROMPT_KEY, value)?
    {
        let masked = mapping
            .get(PROMPT_SECRET_KEY)
            .map(|v| bool_field(PROMPT_SECRET_KEY, v))
            .transpose()?
            .unwrap_or(false);
        return Ok(ValueSpecification::InteractivePrompt { masked });
    }

    let keys: Vec<&str> = mapping.keys().map(|k| k.as_str().unwrap_or("?")).collect();
    Err(format!("unrecognized keys [{}]", keys.join(", ")))
}

fn string_field(key: &str, value: &Value) -> Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("'{key}' must be a string"))
}

fn bool_field(key: &str, value: &Value) -> Result<bool, String> {
    value
        .as_bool()
        .ok_or_else(|| format!("'{key}' must be true or false"))
}

impl Serialize for ValueSpecification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Literal(value) => serializer.serialize_str(value),
            Self::SecretReference {
                secret_id,
                json_key,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry(SECRET_ARN_KEY, secret_id)?;
                if let Some(key) = json_key {
                    map.serialize_entry(SECRET_JSON_KEY, key)?;
                }
                map.end()
            }
            Self::InteractivePrompt { masked } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(PROMPT_KEY, &true)?;
                map.serialize_entry(PROMPT_SECRET_KEY, masked)?;
                map.end()
            }
            Self::EncryptedPayload { ciphertext } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ENCRYPTED_KEY, ciphertext)?;
                map.end()
            }
        }
    }
}
