use serde::Deserialize;
use serde_json::Value;

use super::{MessageBuilder, Notification, Plain, parse_body};
use crate::core::models::{Envelope, ServiceType, Severity};
use crate::errors::ForwarderError;
use crate::utils::links::cloudwatch_alarm_url;

const TITLE: &str = "AWS CloudWatch Notification";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AlarmEvent {
    alarm_name: String,
    #[serde(default)]
    new_state_reason: String,
    #[serde(default)]
    old_state_value: String,
    new_state_value: String,
    trigger: AlarmTrigger,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AlarmTrigger {
    #[serde(default)]
    metric_name: Value,
    #[serde(default)]
    statistic: Value,
    #[serde(default)]
    comparison_operator: Value,
    #[serde(default)]
    threshold: Value,
    #[serde(default)]
    evaluation_periods: Value,
    #[serde(default)]
    period: Value,
}

impl AlarmTrigger {
    fn describe(&self) -> String {
        format!(
            "{} {} {} {} for {} period(s) of {} seconds.",
            Plain(&self.statistic),
            Plain(&self.metric_name),
            Plain(&self.comparison_operator),
            Plain(&self.threshold),
            Plain(&self.evaluation_periods),
            Plain(&self.period),
        )
    }
}

/// # Errors
///
/// Returns `PayloadError` when the body is not a CloudWatch alarm state change.
pub fn render(envelope: &Envelope) -> Result<Notification, ForwarderError> {
    let alarm: AlarmEvent = parse_body(envelope, ServiceType::CloudWatch)?;

    Ok(MessageBuilder::new(
        ServiceType::CloudWatch,
        Severity::from_alarm_state(Some(alarm.new_state_value.as_str())),
        TITLE,
    )
    .field("Alarm Name", &alarm.alarm_name)
    .field("Alarm Description", &alarm.new_state_reason)
    .field("Trigger", alarm.trigger.describe())
    .field("Old State", &alarm.old_state_value)
    .field("Current State", &alarm.new_state_value)
    .field(
        "Link to Alarm",
        cloudwatch_alarm_url(envelope.region(), &alarm.alarm_name),
    )
    .finish(envelope))
}
