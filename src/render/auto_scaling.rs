use serde::Deserialize;

use super::{MessageBuilder, Notification, parse_body};
use crate::core::models::{Envelope, ServiceType, Severity};
use crate::errors::ForwarderError;

const TITLE: &str = "AWS AutoScaling Notification";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ScalingEvent {
    #[serde(default)]
    description: String,
    #[serde(default)]
    event: String,
    #[serde(default)]
    cause: String,
}

/// # Errors
///
/// Returns `PayloadError` when the body is not a JSON object.
pub fn render(envelope: &Envelope) -> Result<Notification, ForwarderError> {
    let event: ScalingEvent = parse_body(envelope, ServiceType::AutoScaling)?;

    Ok(
        MessageBuilder::new(ServiceType::AutoScaling, Severity::Good, TITLE)
            .line(envelope.subject.as_deref().unwrap_or_default())
            .field("Description", &event.description)
            .field("Event", &event.event)
            .field("Cause", &event.cause)
            .finish(envelope),
    )
}
