use std::fmt::Write as _;

use serde_json::{Map, Value};

use super::{MessageBuilder, Notification, Plain, parse_body};
use crate::core::models::{DEFAULT_SUBJECT, Envelope, ServiceType, Severity};
use crate::errors::ForwarderError;

/// Lists every top-level key of the body as `key: value`, in body order.
///
/// # Errors
///
/// Returns `PayloadError` when the body is not a JSON object. There is no
/// further fallback for unrecognised notifications.
pub fn render(envelope: &Envelope) -> Result<Notification, ForwarderError> {
    let body: Map<String, Value> = parse_body(envelope, ServiceType::Generic)?;

    let severity = Severity::from_alarm_state(body.get("NewStateValue").and_then(Value::as_str));

    let mut description = String::new();
    for (key, value) in &body {
        let _ = write!(description, "\n{key}: {}", Plain(value));
    }

    Ok(MessageBuilder::new(
        ServiceType::Generic,
        severity,
        envelope.subject.as_deref().unwrap_or(DEFAULT_SUBJECT),
    )
    .field("Description", description)
    .finish(envelope))
}
