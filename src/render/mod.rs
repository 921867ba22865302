//! Service-specific rendering of SNS notifications into chat text.
//!
//! Every variant produces a [`Notification`] whose text is a severity-decorated
//! title followed by one line per field and a closing timestamp line.

pub mod auto_scaling;
pub mod cloudwatch;
pub mod code_deploy;
pub mod code_pipeline;
pub mod elastic_beanstalk;
pub mod elasticache;
pub mod generic;

use std::fmt::{self, Write as _};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::models::{Envelope, RenderedMessage, ServiceType, Severity};
use crate::errors::ForwarderError;
use crate::utils::timestamp::epoch_seconds;

/// Result of rendering one envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub service: ServiceType,
    pub severity: Severity,
    pub text: String,
}

impl Notification {
    #[must_use]
    pub fn into_message(self, sender: &str) -> RenderedMessage {
        RenderedMessage {
            text: self.text,
            sender: sender.to_string(),
        }
    }
}

/// Renders `envelope` with the rules of `service`.
///
/// # Errors
///
/// Returns `PayloadError` for services whose body must be structured
/// (ElastiCache, CloudWatch, AutoScaling, Generic) when it does not parse.
pub fn render(envelope: &Envelope, service: ServiceType) -> Result<Notification, ForwarderError> {
    match service {
        ServiceType::ElasticBeanstalk => Ok(elastic_beanstalk::render(envelope)),
        ServiceType::CodeDeploy => Ok(code_deploy::render(envelope)),
        ServiceType::CodePipeline => Ok(code_pipeline::render(envelope)),
        ServiceType::ElastiCache => elasticache::render(envelope),
        ServiceType::CloudWatch => cloudwatch::render(envelope),
        ServiceType::AutoScaling => auto_scaling::render(envelope),
        ServiceType::Generic => generic::render(envelope),
    }
}

/// Decodes the message body into a service schema.
pub(crate) fn parse_body<T: DeserializeOwned>(
    envelope: &Envelope,
    service: ServiceType,
) -> Result<T, ForwarderError> {
    serde_json::from_str(&envelope.message_body)
        .map_err(|e| ForwarderError::payload(service, e.to_string()))
}

/// Displays a JSON value the way it reads in chat: strings bare, everything
/// else as compact JSON.
pub(crate) struct Plain<'a>(pub &'a Value);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            // Whole floats print without a fraction: `80.0` reads as `80`.
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(x) => write!(f, "{x}"),
                None => write!(f, "{n}"),
            },
            other => write!(f, "{other}"),
        }
    }
}

pub(crate) struct MessageBuilder {
    service: ServiceType,
    severity: Severity,
    text: String,
}

impl MessageBuilder {
    pub(crate) fn new(service: ServiceType, severity: Severity, title: &str) -> Self {
        Self {
            service,
            severity,
            text: format!("{} *{}* ", severity.decoration(), title),
        }
    }

    /// Appends an unlabeled line.
    pub(crate) fn line(mut self, text: impl fmt::Display) -> Self {
        let _ = write!(self.text, "\n{text}");
        self
    }

    pub(crate) fn field(mut self, label: &str, value: impl fmt::Display) -> Self {
        let _ = write!(self.text, "\n *{label}:* {value}");
        self
    }

    /// Closes the message with the envelope's timestamp.
    pub(crate) fn finish(self, envelope: &Envelope) -> Notification {
        let builder = self.field("Timestamp", epoch_seconds(&envelope.timestamp));
        Notification {
            service: builder.service,
            severity: builder.severity,
            text: builder.text,
        }
    }
}
