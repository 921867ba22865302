use serde::Deserialize;

use super::{MessageBuilder, Notification, parse_body};
use crate::core::models::{Envelope, ServiceType, Severity};
use crate::utils::links::codepipeline_url;

const TITLE: &str = "AWS CodePipeline Notification";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PipelineEvent {
    #[serde(rename = "detail-type")]
    detail_type: String,
    region: String,
    detail: PipelineDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PipelineDetail {
    pipeline: String,
    state: String,
    stage: Option<String>,
}

/// Label for what changed: the whole pipeline, a stage or an action.
fn change_scope(detail_type: &str, stage: Option<&str>) -> String {
    match detail_type {
        "CodePipeline Stage Execution State Change" => {
            format!("STAGE {}", stage.unwrap_or_default())
        }
        "CodePipeline Action Execution State Change" => "ACTION".to_string(),
        _ => String::new(),
    }
}

/// Falls back to the raw message with `Good` severity when the body is not a
/// JSON object. Missing fields render empty and an absent state is a warning.
#[must_use]
pub fn render(envelope: &Envelope) -> Notification {
    match parse_body::<PipelineEvent>(envelope, ServiceType::CodePipeline) {
        Ok(event) => {
            let detail = &event.detail;
            let scope = change_scope(&event.detail_type, detail.stage.as_deref());

            MessageBuilder::new(
                ServiceType::CodePipeline,
                Severity::from_status(&detail.state),
                TITLE,
            )
            .field(&detail.state, format!("CodePipeline {scope}"))
            .field("Pipeline", &detail.pipeline)
            .field("Region", &event.region)
            .field("Status Link", codepipeline_url(&event.region, &detail.pipeline))
            .finish(envelope)
        }
        Err(e) => {
            tracing::debug!("codepipeline body not structured, rendering raw text: {}", e);
            MessageBuilder::new(ServiceType::CodePipeline, Severity::Good, TITLE)
                .line(&envelope.message_body)
                .finish(envelope)
        }
    }
}
