use std::env;

use super::models::ServiceType;

const PLACEHOLDER_ENCRYPTED_URL: &str = "<kmsEncryptedHookUrl>";
const DEFAULT_DISPLAY_USERNAME: &str = "AWS SNS via Lambda";

/// Match text bound to one service type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub service: ServiceType,
    pub pattern: String,
}

/// Signature table in classification priority order using the built-in match texts.
#[must_use]
pub fn default_signatures() -> Vec<Signature> {
    signatures_with(|_| None)
}

fn signatures_with<F>(lookup: F) -> Vec<Signature>
where
    F: Fn(&str) -> Option<String>,
{
    ServiceType::PRIORITY
        .iter()
        .filter_map(|&service| {
            let pattern = service
                .pattern_env_key()
                .and_then(&lookup)
                .filter(|p| !p.is_empty())
                .or_else(|| service.default_pattern().map(str::to_string))?;
            Some(Signature { service, pattern })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url_plaintext: Option<String>,
    pub webhook_url_encrypted: Option<String>,
    pub display_username: String,
    pub signatures: Vec<Signature>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// A missing webhook URL is not rejected here; it surfaces per invocation
    /// when the URL is resolved.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url_plaintext = lookup("UNENCRYPTED_HOOK_URL").filter(|v| !v.trim().is_empty());
        let webhook_url_encrypted = lookup("KMS_ENCRYPTED_HOOK_URL")
            .filter(|v| !v.trim().is_empty() && v != PLACEHOLDER_ENCRYPTED_URL);

        let display_username = lookup("DISPLAY_USERNAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_USERNAME.to_string());

        Self {
            webhook_url_plaintext,
            webhook_url_encrypted,
            display_username,
            signatures: signatures_with(&lookup),
        }
    }
}
