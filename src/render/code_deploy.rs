use serde::Deserialize;

use super::{MessageBuilder, Notification, parse_body};
use crate::core::models::{Envelope, ServiceType, Severity};
use crate::utils::links::codedeploy_deployment_url;

const TITLE: &str = "AWS CodeDeploy Notification";

/// Any JSON object decodes; missing fields render empty and an absent
/// `status` maps to a warning.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DeploymentEvent {
    status: String,
    deployment_group_name: String,
    application_name: String,
    region: String,
    deployment_id: String,
}

/// Falls back to the raw message with `Good` severity when the body is not a
/// JSON object.
#[must_use]
pub fn render(envelope: &Envelope) -> Notification {
    let subject = envelope.subject.as_deref().unwrap_or_default();

    match parse_body::<DeploymentEvent>(envelope, ServiceType::CodeDeploy) {
        Ok(event) => MessageBuilder::new(
            ServiceType::CodeDeploy,
            Severity::from_status(&event.status),
            TITLE,
        )
        .line(subject)
        .field("Deployment Group", &event.deployment_group_name)
        .field("Application", &event.application_name)
        .field(
            "Status Link",
            codedeploy_deployment_url(&event.region, &event.deployment_id),
        )
        .finish(envelope),
        Err(e) => {
            tracing::debug!("codedeploy body not structured, rendering raw text: {}", e);
            MessageBuilder::new(ServiceType::CodeDeploy, Severity::Good, TITLE)
                .line(subject)
                .line(&envelope.message_body)
                .finish(envelope)
        }
    }
}
