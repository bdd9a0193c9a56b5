//! Producing `ENC[...]` values.
//!
//! Each function is the inverse of one decryptor in `decrypt`: the same key
//! source, a fresh nonce, AES-256-GCM over the plaintext.

use biome_client::{KeyService, SecretStore};
use biome_config::{Encryptor, Envelope, MasterKey};

use crate::error::EncryptError;

/// Seal under a new data key generated by the key service.
pub fn seal_with_key_service(
    keys: &dyn KeyService,
    key_id: &str,
    plaintext: &str,
) -> Result<Envelope, EncryptError> {
    let data_key = keys
        .generate_data_key(key_id)
        .map_err(|source| EncryptError::KeyService {
            key_id: key_id.to_string(),
            source,
        })?;
    let key = MasterKey::from_slice(&data_key.plaintext)?;
    let (ciphertext, nonce) = Encryptor::seal(plaintext.as_bytes(), &key)?;

    Ok(Envelope::Kms {
        wrapped_key: data_key.wrapped,
        nonce: nonce.to_vec(),
        ciphertext,
    })
}

/// Seal under the hex key stored in secret `secret_id`.
pub fn seal_with_secret_key(
    secrets: &dyn SecretStore,
    secret_id: &str,
    plaintext: &str,
) -> Result<Envelope, EncryptError> {
    let encoded = secrets
        .get_secret_string(secret_id)
        .map_err(|source| EncryptError::KeySecret {
            secret_id: secret_id.to_string(),
            source,
        })?;
    let key = MasterKey::from_hex(&encoded)?;
    let (ciphertext, nonce) = Encryptor::seal(plaintext.as_bytes(), &key)?;

    Ok(Envelope::SecretsManager {
        secret_id: secret_id.to_string(),
        nonce: nonce.to_vec(),
        ciphertext,
    })
}

/// Seal under a local key.
pub fn seal_with_local_key(key: &MasterKey, plaintext: &str) -> Result<Envelope, EncryptError> {
    let (ciphertext, nonce) = Encryptor::seal(plaintext.as_bytes(), key)?;
    Ok(Envelope::Keyring {
        nonce: nonce.to_vec(),
        ciphertext,
    })
}
