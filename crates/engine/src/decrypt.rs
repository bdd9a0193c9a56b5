//! Decryption strategies for encrypted values.
//!
//! Responsibilities:
//! - One `Decryptor` per envelope technique: KMS data keys, keys held in the
//!   secret store, and the local keyring key.
//! - `WildcardDecryptor`, which tries each technique in turn.
//!
//! Does NOT handle:
//! - Parsing or rendering the envelope text (see `biome_config::envelope`).
//!
//! Invariants:
//! - A decryptor answers `None` when the value is not for its technique, and
//!   never touches its collaborator in that case.
//! - Candidate order is KMS, secret store, keyring.

use biome_client::{KeyService, SecretStore};
use biome_config::encryption::{self, MasterKey};
use biome_config::{Envelope, Technique};

use crate::error::DecryptError;

/// One way of turning an `ENC[...]` value into plaintext.
pub trait Decryptor {
    fn technique(&self) -> Technique;

    /// `None` if this technique does not apply to `payload`.
    fn decrypt(&self, payload: &str) -> Option<Result<String, DecryptError>>;
}

/// Where the local keyring technique gets its key.
#[derive(Debug, Clone, Default)]
pub enum LocalKey {
    /// The OS keyring entry for this tool.
    #[default]
    Keyring,
    /// A key supplied directly.
    Fixed(MasterKey),
}

impl LocalKey {
    pub fn load(&self) -> encryption::Result<MasterKey> {
        match self {
            Self::Keyring => MasterKey::from_keyring(),
            Self::Fixed(key) => Ok(key.clone()),
        }
    }
}

fn parse_for(technique: Technique, payload: &str) -> Option<Result<Envelope, DecryptError>> {
    if Technique::of(payload) != Some(technique) {
        return None;
    }
    Some(Envelope::parse(payload).map_err(DecryptError::from))
}

fn open_text(envelope: &Envelope, key: &MasterKey) -> Result<String, DecryptError> {
    let plaintext = envelope.open_with(key)?;
    String::from_utf8(plaintext).map_err(|_| DecryptError::NotUtf8)
}

/// Data key wrapped by a remote key service.
pub struct KmsDecryptor<'a> {
    keys: &'a dyn KeyService,
}

impl<'a> KmsDecryptor<'a> {
    pub fn new(keys: &'a dyn KeyService) -> Self {
        Self { keys }
    }
}

impl KmsDecryptor<'_> {
    fn open(&self, envelope: &Envelope) -> Result<String, DecryptError> {
        let Envelope::Kms { wrapped_key, .. } = envelope else {
            return Err(DecryptError::NoTechniqueApplies);
        };
        let data_key = self
            .keys
            .decrypt_data_key(wrapped_key)
            .map_err(DecryptError::KeyService)?;
        let key = MasterKey::from_slice(&data_key)?;
        open_text(envelope, &key)
    }
}

impl Decryptor for KmsDecryptor<'_> {
    fn technique(&self) -> Technique {
        Technique::Kms
    }

    fn decrypt(&self, payload: &str) -> Option<Result<String, DecryptError>> {
        let parsed = parse_for(self.technique(), payload)?;
        Some(parsed.and_then(|envelope| self.open(&envelope)))
    }
}

/// Hex key stored as a secret.
pub struct SecretKeyDecryptor<'a> {
    secrets: &'a dyn SecretStore,
}

impl<'a> SecretKeyDecryptor<'a> {
    pub fn new(secrets: &'a dyn SecretStore) -> Self {
        Self { secrets }
    }
}

impl SecretKeyDecryptor<'_> {
    fn open(&self, envelope: &Envelope) -> Result<String, DecryptError> {
        let Envelope::SecretsManager { secret_id, .. } = envelope else {
            return Err(DecryptError::NoTechniqueApplies);
        };
        let encoded = self
            .secrets
            .get_secret_string(secret_id)
            .map_err(|source| DecryptError::KeySecret {
                secret_id: secret_id.clone(),
                source,
            })?;
        let key = MasterKey::from_hex(&encoded)?;
        open_text(envelope, &key)
    }
}

impl Decryptor for SecretKeyDecryptor<'_> {
    fn technique(&self) -> Technique {
        Technique::SecretsManager
    }

    fn decrypt(&self, payload: &str) -> Option<Result<String, DecryptError>> {
        let parsed = parse_for(self.technique(), payload)?;
        Some(parsed.and_then(|envelope| self.open(&envelope)))
    }
}

/// Key held in the local OS keyring.
pub struct KeyringDecryptor<'a> {
    key: &'a LocalKey,
}

impl<'a> KeyringDecryptor<'a> {
    pub fn new(key: &'a LocalKey) -> Self {
        Self { key }
    }
}

impl Decryptor for KeyringDecryptor<'_> {
    fn technique(&self) -> Technique {
        Technique::Keyring
    }

    fn decrypt(&self, payload: &str) -> Option<Result<String, DecryptError>> {
        let parsed = parse_for(self.technique(), payload)?;
        Some(parsed.and_then(|envelope| {
            let key = self.key.load()?;
            open_text(&envelope, &key)
        }))
    }
}

/// Tries every candidate technique in order.
pub struct WildcardDecryptor<'a> {
    candidates: Vec<Box<dyn Decryptor + 'a>>,
}

impl<'a> WildcardDecryptor<'a> {
    pub fn new(candidates: Vec<Box<dyn Decryptor + 'a>>) -> Self {
        Self { candidates }
    }

    /// The standard candidates: KMS, secret store, keyring.
    pub fn standard(
        keys: &'a dyn KeyService,
        secrets: &'a dyn SecretStore,
        local_key: &'a LocalKey,
    ) -> Self {
        Self::new(vec![
            Box::new(KmsDecryptor::new(keys)),
            Box::new(SecretKeyDecryptor::new(secrets)),
            Box::new(KeyringDecryptor::new(local_key)),
        ])
    }

    /// First applicable candidate that succeeds; otherwise the last failure.
    pub fn decrypt(&self, payload: &str) -> Result<String, DecryptError> {
        let mut last_failure = None;

        for candidate in &self.candidates {
            match candidate.decrypt(payload) {
                None => continue,
                Some(Ok(plaintext)) => {
                    tracing::debug!(technique = %candidate.technique(), "Decrypted value");
                    return Ok(plaintext);
                }
                Some(Err(e)) => {
                    tracing::debug!(technique = %candidate.technique(), error = %e, "Decryption attempt failed");
                    last_failure = Some(e);
                }
            }
        }

        Err(last_failure.unwrap_or(DecryptError::NoTechniqueApplies))
    }
}
