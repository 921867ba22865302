/// SNS to chat - forwards AWS service notifications to a chat webhook.
///
/// A Lambda subscribed to one or more SNS topics receives each notification,
/// works out which AWS service sent it, renders a short status-annotated
/// summary and posts it to a chat webhook.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SNS as the notification source
/// - KMS to decrypt the webhook URL when it is stored encrypted
/// - reqwest for webhook delivery
/// - Tokio for async runtime
///
/// Classification and rendering are synchronous and side-effect free; only
/// URL resolution and delivery touch the network.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sns_to_chat::classifier::classify;
/// use sns_to_chat::core::config::default_signatures;
/// use sns_to_chat::core::models::{Envelope, ServiceType};
/// use sns_to_chat::render::render;
///
/// let event = json!({
///     "Records": [{
///         "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:CodeDeploy:abc",
///         "Sns": {
///             "Subject": "Deployment finished",
///             "Message": "{\"status\":\"SUCCEEDED\",\"deploymentGroupName\":\"dg1\",\"applicationName\":\"app1\",\"region\":\"us-east-1\",\"deploymentId\":\"d-123\"}",
///             "Timestamp": "2021-01-04T09:40:00.000Z"
///         }
///     }]
/// });
///
/// let envelope = Envelope::from_event(&event).unwrap();
/// let service = classify(&envelope, &default_signatures());
/// assert_eq!(service, ServiceType::CodeDeploy);
///
/// let notification = render(&envelope, service).unwrap();
/// assert!(notification.text.contains("d-123"));
/// ```
// Module declarations
pub mod classifier;
pub mod clients;
pub mod core;
pub mod errors;
pub mod render;
pub mod utils;
pub mod webhook_url;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start,
/// before the Lambda runtime loop. Later calls are ignored.
///
/// # Example
///
/// ```
/// sns_to_chat::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
