use tracing::warn;

use crate::admission_response::AdmissionResponse;
use crate::admission_review::{self, AdmissionReviewResponse};
use crate::dispatch;

/// Run the whole defaulting pipeline on a raw AdmissionReview body:
/// decode, select the rule for the declared kind, evaluate it against the
/// embedded object and wrap the resulting operations into a response
/// envelope.
///
/// This never fails. A malformed body is answered with a plain acceptance
/// that echoes whatever uid could be recovered: blocking resource creation
/// because the webhook could not read the request would be worse than
/// skipping the defaults.
pub fn evaluate_review(raw: &[u8]) -> AdmissionReviewResponse {
    let review = match admission_review::decode(raw) {
        Ok(review) => review,
        Err(error) => {
            let uid = admission_review::extract_uid(raw).unwrap_or_default();
            warn!(%error, uid = uid.as_str(), "malformed admission review, failing open");
            return AdmissionReviewResponse::new(None, AdmissionResponse::allow(uid));
        }
    };

    if review.resource_kind.is_none() {
        warn!(
            kind = review.kind.as_deref().unwrap_or(""),
            uid = review.uid.as_str(),
            "no defaulting rule for kind, leaving object untouched"
        );
    }

    let rule = dispatch::rule_for(review.resource_kind);
    let ops = rule.evaluate(&review.object);

    let response = match AdmissionResponse::with_patch(review.uid.clone(), &ops) {
        Ok(response) => response,
        Err(error) => {
            warn!(%error, uid = review.uid.as_str(), "cannot encode patch, failing open");
            AdmissionResponse::allow(review.uid)
        }
    };

    AdmissionReviewResponse::new(review.api_version, response)
}
