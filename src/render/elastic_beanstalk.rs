use super::{MessageBuilder, Notification};
use crate::core::models::{Envelope, ServiceType, Severity};

const DEFAULT_TITLE: &str = "AWS Elastic Beanstalk Notification";

const DANGER_PHRASES: [&str; 8] = [
    " to RED",
    " to Severe",
    " but with errors",
    "You do not have permission",
    "Failed to deploy application",
    "Failed to deploy configuration",
    "Your quota allows for 0 more running instance",
    "Unsuccessful command execution",
];

const WARNING_PHRASES: [&str; 7] = [
    " to YELLOW",
    " to Degraded",
    " to Info",
    "Removed instance ",
    "Adding instance ",
    " aborted operation.",
    "some instances may have deployed the new application version",
];

/// Danger phrases take precedence over warning phrases.
#[must_use]
pub fn severity(message: &str) -> Severity {
    if DANGER_PHRASES.iter().any(|p| message.contains(p)) {
        Severity::Danger
    } else if WARNING_PHRASES.iter().any(|p| message.contains(p)) {
        Severity::Warning
    } else {
        Severity::Good
    }
}

/// Beanstalk sends plain text, so there is nothing to parse.
#[must_use]
pub fn render(envelope: &Envelope) -> Notification {
    let title = envelope.subject.as_deref().unwrap_or(DEFAULT_TITLE);

    MessageBuilder::new(
        ServiceType::ElasticBeanstalk,
        severity(&envelope.message_body),
        title,
    )
    .line(&envelope.message_body)
    .finish(envelope)
}
