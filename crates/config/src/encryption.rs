//! AES-256-GCM primitives for encrypted variable values.
//!
//! Responsibilities:
//! - Seal and open payloads with a 32-byte key.
//! - Load the local master key from the OS keyring, creating it on first use.
//! - Parse hex-encoded keys fetched from a secret store.
//!
//! Does NOT handle:
//! - The `ENC[...]` text format (see `envelope`).
//! - Unwrapping data keys with a remote key service (see the client crate).

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use thiserror::Error;

use crate::constants::{KEYRING_MASTER_KEY_ACCOUNT, KEYRING_SERVICE};

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;

/// Errors that can occur during encryption operations.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("Encryption failed")]
    EncryptionFailed,

    #[error("Decryption failed: wrong key or corrupted payload")]
    DecryptionFailed,

    #[error("Invalid key size: expected 32 bytes, got {0}")]
    InvalidKeySize(usize),

    #[error("Invalid nonce size: expected 12 bytes, got {0}")]
    InvalidNonceSize(usize),

    #[error("Key is not valid hex")]
    InvalidKeyEncoding,

    #[error("No master key stored in the keyring")]
    MasterKeyMissing,

    #[error("Keyring error: {0}")]
    KeyringError(#[from] keyring::Error),
}

pub type Result<T> = std::result::Result<T, EncryptionError>;

/// A 32-byte AES-256 key.
#[derive(Clone, PartialEq, Eq)]
pub struct MasterKey([u8; KEY_LEN]);

impl MasterKey {
    pub fn generate() -> Self {
        let key = Aes256Gcm::generate_key(&mut OsRng);
        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&key);
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LEN {
            return Err(EncryptionError::InvalidKeySize(bytes.len()));
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub fn from_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded.trim()).map_err(|_| EncryptionError::InvalidKeyEncoding)?;
        Self::from_slice(&bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Read the stored keyring key. A missing entry is an error.
    pub fn from_keyring() -> Result<Self> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_MASTER_KEY_ACCOUNT)?;
        match entry.get_password() {
            Ok(encoded) => Self::from_hex(&encoded),
            Err(keyring::Error::NoEntry) => Err(EncryptionError::MasterKeyMissing),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the stored keyring key, generating and storing one if absent.
    pub fn keyring_or_generate() -> Result<Self> {
        match Self::from_keyring() {
            Err(EncryptionError::MasterKeyMissing) => {
                let key = Self::generate();
                let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_MASTER_KEY_ACCOUNT)?;
                entry.set_password(&key.to_hex())?;
                tracing::info!("Stored new master key in the OS keyring");
                Ok(key)
            }
            other => other,
        }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey(***)")
    }
}

/// Core cryptographic logic for AES-256-GCM.
pub struct Encryptor;

impl Encryptor {
    /// Encrypts data with a fresh random nonce.
    /// Returns (ciphertext + tag, nonce).
    pub fn seal(data: &[u8], key: &MasterKey) -> Result<(Vec<u8>, [u8; NONCE_LEN])> {
        let cipher = Aes256Gcm::new(key.as_bytes().into());
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, data)
            .map_err(|_| EncryptionError::EncryptionFailed)?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        nonce_bytes.copy_from_slice(&nonce);
        Ok((ciphertext, nonce_bytes))
    }

    /// Decrypts data produced by `seal`.
    pub fn open(ciphertext: &[u8], key: &MasterKey, nonce: &[u8]) -> Result<Vec<u8>> {
        if nonce.len() != NONCE_LEN {
            return Err(EncryptionError::InvalidNonceSize(nonce.len()));
        }
        let cipher = Aes256Gcm::new(key.as_bytes().into());

        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| EncryptionError::DecryptionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open_round_trip() {
        let key = MasterKey::generate();
        let data = b"secret message";

        let (ciphertext, nonce) = Encryptor::seal(data, &key).unwrap();
        let decrypted = Encryptor::open(&ciphertext, &key, &nonce).unwrap();

        assert_eq!(data.to_vec(), decrypted);
    }

    #[test]
    fn test_open_with_wrong_key_fails() {
        let (ciphertext, nonce) = Encryptor::seal(b"data", &MasterKey::generate()).unwrap();

        let result = Encryptor::open(&ciphertext, &MasterKey::generate(), &nonce);
        assert!(matches!(result, Err(EncryptionError::DecryptionFailed)));
    }

    #[test]
    fn test_open_rejects_short_nonce() {
        let key = MasterKey::generate();
        let result = Encryptor::open(b"whatever", &key, &[0u8; 4]);
        assert!(matches!(result, Err(EncryptionError::InvalidNonceSize(4))));
    }

    #[test]
    fn test_nonces_are_unique() {
        let key = MasterKey::generate();
        let (_, first) = Encryptor::seal(b"x", &key).unwrap();
        let (_, second) = Encryptor::seal(b"x", &key).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_key_hex_round_trip_and_size_check() {
        let key = MasterKey::generate();
        assert_eq!(MasterKey::from_hex(&key.to_hex()).unwrap(), key);

        assert!(matches!(
            MasterKey::from_hex("abcd"),
            Err(EncryptionError::InvalidKeySize(2))
        ));
        assert!(matches!(
            MasterKey::from_hex("not hex"),
            Err(EncryptionError::InvalidKeyEncoding)
        ));
    }

    #[test]
    fn test_debug_hides_key_material() {
        let key = MasterKey::from_slice(&[7u8; KEY_LEN]).unwrap();
        assert_eq!(format!("{:?}", key), "MasterKey(***)");
    }
}
