use axum::body::Bytes;
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, Span};

use defaults_engine::admission_review::AdmissionReviewResponse;
use defaults_engine::evaluation::evaluate_review;

#[tracing::instrument(
    name = "mutation",
    fields(
        endpoint = "pvc",
        host = crate::config::HOSTNAME.as_str(),
        request_uid = tracing::field::Empty,
        mutated = tracing::field::Empty,
    ),
    skip_all
)]
pub(crate) async fn mutate_pvc_handler(body: Bytes) -> Json<AdmissionReviewResponse> {
    mutate(&body)
}

#[tracing::instrument(
    name = "mutation",
    fields(
        endpoint = "pod",
        host = crate::config::HOSTNAME.as_str(),
        request_uid = tracing::field::Empty,
        mutated = tracing::field::Empty,
    ),
    skip_all
)]
pub(crate) async fn mutate_pod_handler(body: Bytes) -> Json<AdmissionReviewResponse> {
    mutate(&body)
}

pub(crate) async fn readiness_handler() -> StatusCode {
    StatusCode::OK
}

// The handlers take the raw body rather than a Json extractor: a malformed
// review must still be answered with an acceptance, and the extractor would
// turn it into a 400 before the engine gets a chance to fail open.
fn mutate(body: &[u8]) -> Json<AdmissionReviewResponse> {
    let review = evaluate_review(body);

    Span::current().record("request_uid", review.response.uid.as_str());
    Span::current().record("mutated", review.response.patch.is_some());
    debug!(response = ?review.response, "review evaluated");

    Json(review)
}
