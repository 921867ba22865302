use thiserror::Error;

use crate::core::models::ServiceType;

#[derive(Debug, Error)]
pub enum ForwarderError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to decrypt webhook URL: {0}")]
    DecryptError(String),

    #[error("Failed to read SNS envelope: {0}")]
    EnvelopeError(String),

    #[error("Failed to parse {service} notification: {message}")]
    PayloadError {
        service: ServiceType,
        message: String,
    },

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Webhook server error: {status} - {body}")]
    DeliveryError { status: u16, body: String },

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl ForwarderError {
    pub(crate) fn payload(service: ServiceType, message: impl Into<String>) -> Self {
        ForwarderError::PayloadError {
            service,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ForwarderError {
    fn from(error: reqwest::Error) -> Self {
        ForwarderError::HttpError(error.to_string())
    }
}
