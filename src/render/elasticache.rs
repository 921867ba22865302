use serde_json::{Map, Value};

use super::{MessageBuilder, Notification, Plain, parse_body};
use crate::core::models::{Envelope, ServiceType, Severity};
use crate::errors::ForwarderError;
use crate::utils::links::elasticache_node_url;

const TITLE: &str = "AWS ElastiCache Notification";

/// ElastiCache bodies are a single `{"ElastiCache:<Event>": "<node>"}` pair.
///
/// # Errors
///
/// Returns `PayloadError` when the body is not a JSON object with at least one key.
pub fn render(envelope: &Envelope) -> Result<Notification, ForwarderError> {
    let body: Map<String, Value> = parse_body(envelope, ServiceType::ElastiCache)?;
    let (key, node) = body
        .iter()
        .next()
        .ok_or_else(|| ForwarderError::payload(ServiceType::ElastiCache, "empty event object"))?;

    let event_name = key.split(':').nth(1).unwrap_or(key.as_str());
    let node = Plain(node).to_string();

    Ok(
        MessageBuilder::new(ServiceType::ElastiCache, Severity::Good, TITLE)
            .field("Event", event_name)
            .field("Node", &node)
            .field(
                "Link to cache node",
                elasticache_node_url(envelope.region(), &node),
            )
            .finish(envelope),
    )
}
