//! Chat webhook delivery.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;

use crate::core::models::RenderedMessage;
use crate::errors::ForwarderError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Raw result of one webhook POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

/// How an invocation should end after a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// 4xx: the request itself is bad, so redelivery would not help.
    Rejected(WebhookResponse),
    /// 5xx: the platform should redeliver the notification.
    RetryableFailure(WebhookResponse),
}

impl DeliveryOutcome {
    #[must_use]
    pub fn from_response(response: WebhookResponse) -> Self {
        match response.status {
            0..=399 => DeliveryOutcome::Delivered,
            400..=499 => DeliveryOutcome::Rejected(response),
            _ => DeliveryOutcome::RetryableFailure(response),
        }
    }
}

#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Posts `message` to `url`. Transport failures are errors; any HTTP
    /// status is returned as a response.
    async fn post(
        &self,
        url: &str,
        message: &RenderedMessage,
    ) -> Result<WebhookResponse, ForwarderError>;
}

/// [`WebhookSink`] backed by a shared `reqwest` client.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestWebhookSink;

#[async_trait]
impl WebhookSink for ReqwestWebhookSink {
    async fn post(
        &self,
        url: &str,
        message: &RenderedMessage,
    ) -> Result<WebhookResponse, ForwarderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = HTTP_CLIENT
            .post(url)
            .headers(headers)
            .json(message)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());

        Ok(WebhookResponse { status, body })
    }
}
