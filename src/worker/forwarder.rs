use serde_json::Value;
use tracing::{debug, info};

use crate::classifier::classify;
use crate::clients::{Decryptor, DeliveryOutcome, WebhookSink};
use crate::core::config::AppConfig;
use crate::core::models::{Envelope, RenderedMessage};
use crate::errors::ForwarderError;
use crate::render::render;
use crate::webhook_url::WebhookUrlCache;

/// Turns one SNS delivery into one chat message.
///
/// Built once per process; the webhook URL cache outlives individual invocations.
pub struct Forwarder {
    config: AppConfig,
    webhook_url: WebhookUrlCache,
    decryptor: Box<dyn Decryptor>,
    sink: Box<dyn WebhookSink>,
}

impl Forwarder {
    pub fn new(
        config: AppConfig,
        decryptor: Box<dyn Decryptor>,
        sink: Box<dyn WebhookSink>,
    ) -> Self {
        Self {
            config,
            webhook_url: WebhookUrlCache::new(),
            decryptor,
            sink,
        }
    }

    /// Classifies and renders the first record of `payload`. Pure apart from logging.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is not an SNS event or the body does
    /// not fit a service that requires structured input.
    pub fn render_event(&self, payload: &Value) -> Result<RenderedMessage, ForwarderError> {
        let envelope = Envelope::from_event(payload)?;
        let service = classify(&envelope, &self.config.signatures);
        info!(service = %service, "processing {} notification", service);

        let notification = render(&envelope, service)?;
        Ok(notification.into_message(&self.config.display_username))
    }

    /// Resolves the webhook, renders the event and posts it.
    ///
    /// # Errors
    ///
    /// Misconfiguration is reported before the payload is looked at. Render
    /// and transport failures are returned as is.
    pub async fn process(&self, payload: &Value) -> Result<DeliveryOutcome, ForwarderError> {
        let url = self
            .webhook_url
            .resolve(&self.config, self.decryptor.as_ref())
            .await?;
        debug!("sns received: {}", payload);

        let message = self.render_event(payload)?;
        let response = self.sink.post(url, &message).await?;

        Ok(DeliveryOutcome::from_response(response))
    }
}
