//! Encrypted values.

use crate::decrypt::WildcardDecryptor;
use crate::error::SetterError;

pub(super) fn resolve(
    decryptor: &WildcardDecryptor<'_>,
    ciphertext: &str,
) -> Result<String, SetterError> {
    Ok(decryptor.decrypt(ciphertext)?)
}
