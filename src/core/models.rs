use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ForwarderError;

/// Subject label scanned by the classifier when SNS omits one.
pub const DEFAULT_SUBJECT: &str = "no subject";

/// One inbound SNS notification, taken from the first record of a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub subscription_id: String,
    pub subject: Option<String>,
    pub message_body: String,
    pub timestamp: String,
}

impl Envelope {
    /// Decodes the Lambda payload and keeps only the first record.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError` when the payload is not an SNS event or carries no records.
    pub fn from_event(payload: &Value) -> Result<Self, ForwarderError> {
        let event = SnsEvent::deserialize(payload)
            .map_err(|e| ForwarderError::EnvelopeError(format!("not an SNS event: {e}")))?;

        let record = event
            .records
            .into_iter()
            .next()
            .ok_or_else(|| ForwarderError::EnvelopeError("event has no records".to_string()))?;

        Ok(Self {
            subscription_id: record.event_subscription_arn,
            subject: record.sns.subject.filter(|s| !s.is_empty()),
            message_body: record.sns.message,
            timestamp: record.sns.timestamp,
        })
    }

    /// Subject as seen by the classifier, falling back to [`DEFAULT_SUBJECT`].
    #[must_use]
    pub fn subject_or_default(&self) -> &str {
        self.subject.as_deref().unwrap_or(DEFAULT_SUBJECT)
    }

    /// Region component of the subscription ARN (`arn:aws:sns:<region>:...`).
    #[must_use]
    pub fn region(&self) -> &str {
        self.subscription_id.split(':').nth(3).unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct SnsEvent {
    #[serde(rename = "Records", default)]
    records: Vec<SnsRecord>,
}

#[derive(Debug, Deserialize)]
struct SnsRecord {
    #[serde(rename = "EventSubscriptionArn", default)]
    event_subscription_arn: String,
    #[serde(rename = "Sns")]
    sns: SnsPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SnsPayload {
    #[serde(default)]
    subject: Option<String>,
    message: String,
    #[serde(default)]
    timestamp: String,
}

/// Originating AWS service of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    ElasticBeanstalk,
    CloudWatch,
    CodePipeline,
    CodeDeploy,
    ElastiCache,
    AutoScaling,
    Generic,
}

impl ServiceType {
    /// Classification priority; `Generic` is implied after the last entry.
    pub const PRIORITY: [ServiceType; 6] = [
        ServiceType::CodePipeline,
        ServiceType::ElasticBeanstalk,
        ServiceType::CloudWatch,
        ServiceType::CodeDeploy,
        ServiceType::ElastiCache,
        ServiceType::AutoScaling,
    ];

    /// Built-in match text, `None` for the catch-all.
    #[must_use]
    pub fn default_pattern(self) -> Option<&'static str> {
        match self {
            ServiceType::ElasticBeanstalk => Some("ElasticBeanstalkNotifications"),
            ServiceType::CloudWatch => Some("CloudWatchNotifications"),
            ServiceType::CodePipeline => Some("CodePipelineNotifications"),
            ServiceType::CodeDeploy => Some("CodeDeploy"),
            ServiceType::ElastiCache => Some("ElastiCache"),
            ServiceType::AutoScaling => Some("AutoScaling"),
            ServiceType::Generic => None,
        }
    }

    /// Environment variable that overrides the match text.
    #[must_use]
    pub fn pattern_env_key(self) -> Option<&'static str> {
        match self {
            ServiceType::ElasticBeanstalk => Some("MATCH_TEXT_ELASTICBEANSTALK"),
            ServiceType::CloudWatch => Some("MATCH_TEXT_CLOUDWATCH"),
            ServiceType::CodePipeline => Some("MATCH_TEXT_CODEPIPELINE"),
            ServiceType::CodeDeploy => Some("MATCH_TEXT_CODEDEPLOY"),
            ServiceType::ElastiCache => Some("MATCH_TEXT_ELASTICACHE"),
            ServiceType::AutoScaling => Some("MATCH_TEXT_AUTOSCALING"),
            ServiceType::Generic => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceType::ElasticBeanstalk => "elasticbeanstalk",
            ServiceType::CloudWatch => "cloudwatch",
            ServiceType::CodePipeline => "codepipeline",
            ServiceType::CodeDeploy => "codedeploy",
            ServiceType::ElastiCache => "elasticache",
            ServiceType::AutoScaling => "autoscaling",
            ServiceType::Generic => "generic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

impl Severity {
    #[must_use]
    pub fn decoration(self) -> &'static str {
        match self {
            Severity::Good => " ;) *[GOOD]*",
            Severity::Warning => " :/ *[WARNING]*",
            Severity::Danger => " :O *[DANGER]*",
        }
    }

    /// Maps a `SUCCEEDED`/`FAILED` style status; anything else is a warning.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "SUCCEEDED" => Severity::Good,
            "FAILED" => Severity::Danger,
            _ => Severity::Warning,
        }
    }

    /// Maps a CloudWatch alarm state; anything but `ALARM`/`OK` is a warning.
    #[must_use]
    pub fn from_alarm_state(state: Option<&str>) -> Self {
        match state {
            Some("ALARM") => Severity::Danger,
            Some("OK") => Severity::Good,
            _ => Severity::Warning,
        }
    }
}

/// Chat message body posted to the webhook as `{"message": ..., "user": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    #[serde(rename = "message")]
    pub text: String,
    #[serde(rename = "user")]
    pub sender: String,
}
