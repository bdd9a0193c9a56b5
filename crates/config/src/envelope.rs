//! The `ENC[...]` text format for encrypted variable values.
//!
//! Responsibilities:
//! - Parse envelope text into a typed `Envelope`.
//! - Render an `Envelope` back into its text form.
//!
//! Does NOT handle:
//! - Obtaining keys (see `encryption` and the engine's decryptors).
//!
//! Invariants:
//! - Text is `ENC[<TECHNIQUE>,<fields>]`; fields are `;`-separated.
//! - Binary fields are standard base64; the secret id field is plain text.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::encryption::{self, Encryptor, MasterKey};

const PREFIX: &str = "ENC[";
const SUFFIX: &str = "]";

/// Where the data key for an envelope comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    /// Data key wrapped by a remote key service
    Kms,
    /// Hex key stored in a secret store
    SecretsManager,
    /// Hex key stored in the local OS keyring
    Keyring,
}

impl Technique {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Kms => "KMS",
            Self::SecretsManager => "SM",
            Self::Keyring => "KEYRING",
        }
    }

    fn field_count(self) -> usize {
        match self {
            Self::Kms | Self::SecretsManager => 3,
            Self::Keyring => 2,
        }
    }

    /// Technique named by `text`, if it looks like an envelope at all.
    pub fn of(text: &str) -> Option<Self> {
        let (tag, _) = split_envelope(text)?;
        tag.parse().ok()
    }
}

impl FromStr for Technique {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KMS" => Ok(Self::Kms),
            "SM" => Ok(Self::SecretsManager),
            "KEYRING" => Ok(Self::Keyring),
            other => Err(EnvelopeError::UnknownTechnique(other.to_string())),
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("value is not an ENC[...] envelope")]
    NotAnEnvelope,

    #[error("unknown encryption technique '{0}'")]
    UnknownTechnique(String),

    #[error("{technique} envelope needs {expected} fields, found {found}")]
    FieldCount {
        technique: Technique,
        expected: usize,
        found: usize,
    },

    #[error("{technique} envelope field '{field}' is not valid base64")]
    InvalidBase64 {
        technique: Technique,
        field: &'static str,
    },

    #[error("SM envelope has an empty secret id")]
    EmptySecretId,
}

/// A parsed encrypted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Kms {
        wrapped_key: Vec<u8>,
        nonce: Vec<u8>,
        ciphertext: Vec<u8>,
    },
    SecretsManager {
        secret_id: String,
        nonce: Vec<u8>,
        ciphertext: Vec<u8>,
    },
    Keyring {
        nonce: Vec<u8>,
        ciphertext: Vec<u8>,
    },
}

impl Envelope {
    pub fn parse(text: &str) -> Result<Self, EnvelopeError> {
        let (tag, body) = split_envelope(text).ok_or(EnvelopeError::NotAnEnvelope)?;
        let technique: Technique = tag.parse()?;

        let fields: Vec<&str> = body.split(';').collect();
        if fields.len() != technique.field_count() {
            return Err(EnvelopeError::FieldCount {
                technique,
                expected: technique.field_count(),
                found: fields.len(),
            });
        }

        let decode = |field: &'static str, value: &str| {
            STANDARD
                .decode(value.trim())
                .map_err(|_| EnvelopeError::InvalidBase64 { technique, field })
        };

        match technique {
            Technique::Kms => Ok(Self::Kms {
                wrapped_key: decode("wrapped key", fields[0])?,
                nonce: decode("nonce", fields[1])?,
                ciphertext: decode("ciphertext", fields[2])?,
            }),
            Technique::SecretsManager => {
                let secret_id = fields[0].trim();
                if secret_id.is_empty() {
                    return Err(EnvelopeError::EmptySecretId);
                }
                Ok(Self::SecretsManager {
                    secret_id: secret_id.to_string(),
                    nonce: decode("nonce", fields[1])?,
                    ciphertext: decode("ciphertext", fields[2])?,
                })
            }
            Technique::Keyring => Ok(Self::Keyring {
                nonce: decode("nonce", fields[0])?,
                ciphertext: decode("ciphertext", fields[1])?,
            }),
        }
    }

    pub fn technique(&self) -> Technique {
        match self {
            Self::Kms { .. } => Technique::Kms,
            Self::SecretsManager { .. } => Technique::SecretsManager,
            Self::Keyring { .. } => Technique::Keyring,
        }
    }

    /// Open the payload once the data key is known.
    pub fn open_with(&self, key: &MasterKey) -> encryption::Result<Vec<u8>> {
        let (nonce, ciphertext) = match self {
            Self::Kms {
                nonce, ciphertext, ..
            }
            | Self::SecretsManager {
                nonce, ciphertext, ..
            }
            | Self::Keyring { nonce, ciphertext } => (nonce, ciphertext),
        };
        Encryptor::open(ciphertext, key, nonce)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let technique = self.technique();
        match self {
            Self::Kms {
                wrapped_key,
                nonce,
                ciphertext,
            } => write!(
                f,
                "{PREFIX}{technique},{};{};{}{SUFFIX}",
                STANDARD.encode(wrapped_key),
                STANDARD.encode(nonce),
                STANDARD.encode(ciphertext)
            ),
            Self::SecretsManager {
                secret_id,
                nonce,
                ciphertext,
            } => write!(
                f,
                "{PREFIX}{technique},{secret_id};{};{}{SUFFIX}",
                STANDARD.encode(nonce),
                STANDARD.encode(ciphertext)
            ),
            Self::Keyring { nonce, ciphertext } => write!(
                f,
                "{PREFIX}{technique},{};{}{SUFFIX}",
                STANDARD.encode(nonce),
                STANDARD.encode(ciphertext)
            ),
        }
    }
}

fn split_envelope(text: &str) -> Option<(&str, &str)> {
    text.trim()
        .strip_prefix(PREFIX)?
        .strip_suffix(SUFFIX)?
        .split_once(',')
}
