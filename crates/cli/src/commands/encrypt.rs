//! Encrypt command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use biome_client::{AwsContext, AwsKeyService, AwsSecretStore};
use biome_config::MasterKey;
use biome_engine::{
    Prompter, TerminalPrompter, seal_with_key_service, seal_with_local_key, seal_with_secret_key,
};

use crate::args::EncryptTarget;

/// Read a value and print its `ENC[...]` form on stdout.
pub fn run(target: &EncryptTarget) -> Result<()> {
    let mut prompter = TerminalPrompter;
    let plaintext = prompter
        .prompt("Value to encrypt", true)
        .context("Failed to read the value to encrypt")?;
    if plaintext.is_empty() {
        bail!("Refusing to encrypt an empty value");
    }

    let envelope = if let Some(key_id) = target.kms_key_id.as_deref() {
        let context = Arc::new(AwsContext::new()?);
        seal_with_key_service(&AwsKeyService::new(context), key_id, &plaintext)?
    } else if let Some(secret_id) = target.secret_id.as_deref() {
        let context = Arc::new(AwsContext::new()?);
        seal_with_secret_key(&AwsSecretStore::new(context), secret_id, &plaintext)?
    } else {
        let key = MasterKey::keyring_or_generate().context("Failed to load the keyring key")?;
        seal_with_local_key(&key, &plaintext)?
    };

    println!("{}", envelope);
    Ok(())
}
