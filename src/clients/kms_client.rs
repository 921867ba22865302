//! Decryption of the KMS-encrypted webhook URL.

use async_trait::async_trait;
use aws_sdk_kms::Client as KmsClient;
use aws_sdk_kms::primitives::Blob;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::errors::ForwarderError;

#[async_trait]
pub trait Decryptor: Send + Sync {
    /// Decrypts base64-encoded ciphertext into UTF-8 plaintext.
    async fn decrypt(&self, ciphertext_b64: &str) -> Result<String, ForwarderError>;
}

/// Decodes base64 ciphertext into the raw bytes KMS expects.
///
/// # Errors
///
/// Returns `DecryptError` when the value is not valid base64.
pub fn decode_ciphertext(ciphertext_b64: &str) -> Result<Vec<u8>, ForwarderError> {
    STANDARD
        .decode(ciphertext_b64.trim())
        .map_err(|e| ForwarderError::DecryptError(format!("ciphertext is not base64: {e}")))
}

/// [`Decryptor`] calling AWS KMS with the ambient Lambda credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct KmsDecryptor;

#[async_trait]
impl Decryptor for KmsDecryptor {
    async fn decrypt(&self, ciphertext_b64: &str) -> Result<String, ForwarderError> {
        let ciphertext = decode_ciphertext(ciphertext_b64)?;

        let shared = aws_config::from_env().load().await;
        let client = KmsClient::new(&shared);

        let resp = client
            .decrypt()
            .ciphertext_blob(Blob::new(ciphertext))
            .send()
            .await
            .map_err(|e| ForwarderError::AwsError(format!("kms decrypt: {e}")))?;

        let plaintext = resp
            .plaintext()
            .ok_or_else(|| ForwarderError::DecryptError("kms returned no plaintext".to_string()))?;

        String::from_utf8(plaintext.as_ref().to_vec())
            .map_err(|e| ForwarderError::DecryptError(format!("plaintext is not UTF-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_base64() {
        assert_eq!(
            decode_ciphertext("aG9va3MuZXhhbXBsZS5jb20=").unwrap(),
            b"hooks.example.com".to_vec()
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_ciphertext("not base64!"),
            Err(ForwarderError::DecryptError(_))
        ));
    }
}
