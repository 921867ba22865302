//! Client modules for external service interactions

pub mod kms_client;
pub mod webhook_client;

pub use kms_client::{Decryptor, KmsDecryptor};
pub use webhook_client::{DeliveryOutcome, ReqwestWebhookSink, WebhookResponse, WebhookSink};
