//! Key service collaborator for envelope encryption.
//!
//! Responsibilities:
//! - Define `KeyService`: unwrap a data key, or generate a new wrapped one.
//! - Implement it with AWS KMS `Decrypt` and `GenerateDataKey`.

use std::fmt;
use std::sync::Arc;

use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use aws_sdk_kms::types::DataKeySpec;

use crate::context::AwsContext;
use crate::error::{ClientError, Result};

/// A fresh data key in plaintext and wrapped form.
pub struct DataKey {
    pub plaintext: Vec<u8>,
    pub wrapped: Vec<u8>,
}

impl fmt::Debug for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataKey")
            .field("plaintext", &"***")
            .field("wrapped_len", &self.wrapped.len())
            .finish()
    }
}

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait KeyService {
    /// Unwrap a data key produced by `generate_data_key`.
    fn decrypt_data_key(&self, wrapped: &[u8]) -> Result<Vec<u8>>;

    /// Create a 256-bit data key under the master key `key_id`.
    fn generate_data_key(&self, key_id: &str) -> Result<DataKey>;
}

/// `KeyService` backed by AWS KMS.
#[derive(Debug)]
pub struct AwsKeyService {
    context: Arc<AwsContext>,
}

impl AwsKeyService {
    pub fn new(context: Arc<AwsContext>) -> Self {
        Self { context }
    }

    fn client(&self) -> aws_sdk_kms::Client {
        aws_sdk_kms::Client::new(self.context.default_config())
    }
}

impl KeyService for AwsKeyService {
    fn decrypt_data_key(&self, wrapped: &[u8]) -> Result<Vec<u8>> {
        let request = self
            .client()
            .decrypt()
            .ciphertext_blob(Blob::new(wrapped.to_vec()));

        let output = self
            .context
            .block_on(request.send())
            .map_err(|e| ClientError::KeyService(DisplayErrorContext(&e).to_string()))?;

        output
            .plaintext()
            .map(|blob| blob.as_ref().to_vec())
            .ok_or_else(|| ClientError::InvalidResponse("KMS decrypt returned no plaintext".to_string()))
    }

    fn generate_data_key(&self, key_id: &str) -> Result<DataKey> {
        let request = self
            .client()
            .generate_data_key()
            .key_id(key_id)
            .key_spec(DataKeySpec::Aes256);

        let output = self
            .context
            .block_on(request.send())
            .map_err(|e| ClientError::KeyService(DisplayErrorContext(&e).to_string()))?;

        let missing =
            |field: &str| ClientError::InvalidResponse(format!("KMS data key response missing {field}"));
        let plaintext = output.plaintext().ok_or_else(|| missing("plaintext"))?;
        let wrapped = output.ciphertext_blob().ok_or_else(|| missing("ciphertext"))?;

        tracing::debug!(key_id = %key_id, "Generated data key");
        Ok(DataKey {
            plaintext: plaintext.as_ref().to_vec(),
            wrapped: wrapped.as_ref().to_vec(),
        })
    }
}
