//! Lazily resolved, process-wide webhook destination.

use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::clients::Decryptor;
use crate::core::config::AppConfig;
use crate::errors::ForwarderError;
use crate::utils::links::parse_webhook_url;

/// Caches the webhook URL once it has been resolved successfully.
///
/// A failed resolution leaves the cache empty, so the next invocation tries again.
#[derive(Debug, Default)]
pub struct WebhookUrlCache {
    url: OnceCell<String>,
}

impl WebhookUrlCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.url.get().map(String::as_str)
    }

    /// Returns the cached URL, resolving it from `config` on first use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when neither the encrypted nor the plaintext
    /// setting yields a usable `http(s)` URL.
    pub async fn resolve(
        &self,
        config: &AppConfig,
        decryptor: &dyn Decryptor,
    ) -> Result<&str, ForwarderError> {
        self.url
            .get_or_try_init(|| resolve_webhook_url(config, decryptor))
            .await
            .map(String::as_str)
    }
}

/// Encrypted setting first, plaintext as the fallback.
async fn resolve_webhook_url(
    config: &AppConfig,
    decryptor: &dyn Decryptor,
) -> Result<String, ForwarderError> {
    if let Some(encrypted) = &config.webhook_url_encrypted {
        match decryptor.decrypt(encrypted).await {
            Ok(plaintext) => {
                let url = with_scheme(&plaintext);
                if parse_webhook_url(&url).is_some() {
                    info!("Resolved webhook URL from encrypted configuration");
                    return Ok(url);
                }
                error!("Decrypted webhook URL is not a valid http(s) URL");
            }
            Err(e) => error!("decrypt error: {}", e),
        }
    }

    let Some(plaintext) = &config.webhook_url_plaintext else {
        return Err(ForwarderError::ConfigError(
            "hook url has not been set".to_string(),
        ));
    };

    match parse_webhook_url(plaintext) {
        Some(_) => Ok(plaintext.trim().to_string()),
        None => Err(ForwarderError::ConfigError(format!(
            "UNENCRYPTED_HOOK_URL is not a valid http(s) URL: {plaintext}"
        ))),
    }
}

/// Encrypted values are stored without a scheme.
fn with_scheme(decrypted: &str) -> String {
    let decrypted = decrypted.trim();
    if decrypted.starts_with("https://") || decrypted.starts_with("http://") {
        decrypted.to_string()
    } else {
        format!("https://{decrypted}")
    }
}
