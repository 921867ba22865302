use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sns_to_chat::clients::Decryptor;
use sns_to_chat::core::config::AppConfig;
use sns_to_chat::errors::ForwarderError;
use sns_to_chat::webhook_url::WebhookUrlCache;

/// Returns a fixed plaintext (or failure) and counts calls.
struct FakeDecryptor {
    plaintext: Option<&'static str>,
    calls: AtomicUsize,
}

impl FakeDecryptor {
    fn new(plaintext: Option<&'static str>) -> Self {
        Self {
            plaintext,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Decryptor for FakeDecryptor {
    async fn decrypt(&self, _ciphertext_b64: &str) -> Result<String, ForwarderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.plaintext
            .map(str::to_string)
            .ok_or_else(|| ForwarderError::DecryptError("access denied".to_string()))
    }
}

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[tokio::test]
async fn decrypted_url_gets_https_scheme_and_is_cached() {
    let config = config_from(&[("KMS_ENCRYPTED_HOOK_URL", "Y2lwaGVy")]);
    let decryptor = FakeDecryptor::new(Some("hooks.example.com/services/abc"));
    let cache = WebhookUrlCache::new();

    let first = cache.resolve(&config, &decryptor).await.unwrap().to_string();
    let second = cache.resolve(&config, &decryptor).await.unwrap().to_string();

    assert_eq!(first, "https://hooks.example.com/services/abc");
    assert_eq!(first, second);
    assert_eq!(decryptor.calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.get(), Some("https://hooks.example.com/services/abc"));
}

#[tokio::test]
async fn plaintext_used_when_no_ciphertext() {
    let config = config_from(&[("UNENCRYPTED_HOOK_URL", "https://hooks.example.com/plain")]);
    let decryptor = FakeDecryptor::new(None);
    let cache = WebhookUrlCache::new();

    let url = cache.resolve(&config, &decryptor).await.unwrap();
    assert_eq!(url, "https://hooks.example.com/plain");
    assert_eq!(decryptor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn decrypt_failure_falls_back_to_plaintext() {
    let config = config_from(&[
        ("KMS_ENCRYPTED_HOOK_URL", "Y2lwaGVy"),
        ("UNENCRYPTED_HOOK_URL", "https://hooks.example.com/plain"),
    ]);
    let decryptor = FakeDecryptor::new(None);
    let cache = WebhookUrlCache::new();

    let url = cache.resolve(&config, &decryptor).await.unwrap();
    assert_eq!(url, "https://hooks.example.com/plain");
}

#[tokio::test]
async fn invalid_decrypted_url_falls_back_to_plaintext() {
    let config = config_from(&[
        ("KMS_ENCRYPTED_HOOK_URL", "Y2lwaGVy"),
        ("UNENCRYPTED_HOOK_URL", "https://hooks.example.com/plain"),
    ]);
    let decryptor = FakeDecryptor::new(Some("http://"));
    let cache = WebhookUrlCache::new();

    let url = cache.resolve(&config, &decryptor).await.unwrap();
    assert_eq!(url, "https://hooks.example.com/plain");
    assert_eq!(decryptor.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_resolution_is_not_cached() {
    let config = config_from(&[("KMS_ENCRYPTED_HOOK_URL", "Y2lwaGVy")]);
    let decryptor = FakeDecryptor::new(None);
    let cache = WebhookUrlCache::new();

    let err = cache.resolve(&config, &decryptor).await.unwrap_err();
    assert!(matches!(err, ForwarderError::ConfigError(_)));
    assert!(cache.get().is_none());

    // Every invocation retries the resolution.
    assert!(cache.resolve(&config, &decryptor).await.is_err());
    assert_eq!(decryptor.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn nothing_configured_is_config_error() {
    let config = config_from(&[]);
    let cache = WebhookUrlCache::new();

    let err = cache
        .resolve(&config, &FakeDecryptor::new(None))
        .await
        .unwrap_err();
    assert!(matches!(err, ForwarderError::ConfigError(_)));
}

#[tokio::test]
async fn invalid_plaintext_url_is_config_error() {
    let config = config_from(&[("UNENCRYPTED_HOOK_URL", "hooks.example.com/no-scheme")]);
    let cache = WebhookUrlCache::new();

    let err = cache
        .resolve(&config, &FakeDecryptor::new(None))
        .await
        .unwrap_err();
    assert!(matches!(err, ForwarderError::ConfigError(_)));
}
