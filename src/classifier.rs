//! Picks the originating service of an SNS notification.

use crate::core::config::Signature;
use crate::core::models::{Envelope, ServiceType};

/// Returns the service of the first signature whose pattern occurs in the
/// subscription ARN, the subject or the message body.
///
/// Matching is a case-sensitive substring search and `signatures` is scanned in
/// order, so earlier entries win ties. Falls back to [`ServiceType::Generic`].
#[must_use]
pub fn classify(envelope: &Envelope, signatures: &[Signature]) -> ServiceType {
    let fields = [
        envelope.subscription_id.as_str(),
        envelope.subject_or_default(),
        envelope.message_body.as_str(),
    ];

    signatures
        .iter()
        .find(|sig| !sig.pattern.is_empty() && fields.iter().any(|f| f.contains(&sig.pattern)))
        .map_or(ServiceType::Generic, |sig| sig.service)
}
