use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::forwarder::Forwarder;
use crate::clients::DeliveryOutcome;
use crate::errors::ForwarderError;

/// Lambda handler for SNS deliveries.
///
/// Returns `Ok` when the message was posted or rejected with a 4xx (redelivery
/// would not help) and `Err` for anything the platform should retry or surface.
pub async fn function_handler(
    forwarder: &Forwarder,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    let outcome = forwarder.process(&event.payload).await.map_err(|e| {
        error!("Failed to forward notification: {}", e);
        Error::from(e)
    })?;

    settle(outcome).map_err(Error::from)
}

/// Maps a delivery outcome to the invocation result.
///
/// # Errors
///
/// Returns `DeliveryError` for 5xx responses.
pub fn settle(outcome: DeliveryOutcome) -> Result<(), ForwarderError> {
    match outcome {
        DeliveryOutcome::Delivered => {
            info!("message posted successfully");
            Ok(())
        }
        DeliveryOutcome::Rejected(resp) => {
            // Not retried: the request itself is malformed.
            error!(
                "error posting message to chat webhook: {} - {}",
                resp.status, resp.body
            );
            Ok(())
        }
        DeliveryOutcome::RetryableFailure(resp) => {
            error!(
                "server error when processing message: {} - {}",
                resp.status, resp.body
            );
            Err(ForwarderError::DeliveryError {
                status: resp.status,
                body: resp.body,
            })
        }
    }
}

pub use self::function_handler as handler;
