// This is the Lambda bootstrap entry point for the SNS forwarder

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use sns_to_chat::clients::{KmsDecryptor, ReqwestWebhookSink};
use sns_to_chat::core::config::AppConfig;
use sns_to_chat::worker::{Forwarder, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    sns_to_chat::setup_logging();

    // One forwarder per process so the resolved webhook URL is reused across invocations.
    let forwarder = Arc::new(Forwarder::new(
        AppConfig::from_env(),
        Box::new(KmsDecryptor),
        Box::new(ReqwestWebhookSink),
    ));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let forwarder = Arc::clone(&forwarder);
        async move { handler(&forwarder, event).await }
    }))
    .await
}
