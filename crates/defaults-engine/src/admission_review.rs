use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::admission_response::AdmissionResponse;
use crate::errors::DecodeError;

pub const ADMISSION_REVIEW_KIND: &str = "AdmissionReview";
pub const ADMISSION_REVIEW_API_VERSION: &str = "admission.k8s.io/v1";

/// The resource kinds the engine knows how to default. Adding a new kind here
/// forces the dispatch table to be extended, the match over it is exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    PersistentVolumeClaim,
    Pod,
}

impl ResourceKind {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "PersistentVolumeClaim" => Some(ResourceKind::PersistentVolumeClaim),
            "Pod" => Some(ResourceKind::Pod),
            _ => None,
        }
    }
}

/// A decoded admission request, valid for the duration of a single call.
#[derive(Clone, Debug)]
pub struct ReviewRequest {
    /// Correlation token of the caller, echoed verbatim in the response.
    pub uid: String,

    /// The kind declared by the request, when it maps to a known resource.
    pub resource_kind: Option<ResourceKind>,

    /// The raw kind string, kept for logging unrecognized kinds.
    pub kind: Option<String>,

    /// The proposed resource object, as an untyped document. Rules perform
    /// their own presence checks on it.
    pub object: Value,

    /// The envelope version declared by the caller.
    pub api_version: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawAdmissionReview {
    api_version: Option<String>,
    request: Option<RawAdmissionRequest>,
}

#[derive(Deserialize, Debug)]
struct RawAdmissionRequest {
    uid: Option<String>,
    kind: Option<RawGroupVersionKind>,
    object: Option<Value>,
}

#[derive(Deserialize, Debug)]
struct RawGroupVersionKind {
    kind: Option<String>,
}

/// Parse the body of an inbound AdmissionReview.
///
/// `uid` and `object` are required, everything else is optional: a request
/// whose object lacks `spec` or any deeper field is well-formed, defaulting
/// those fields is the job of the rules.
pub fn decode(raw: &[u8]) -> Result<ReviewRequest, DecodeError> {
    let review: RawAdmissionReview = serde_json::from_slice(raw)?;
    let request = review.request.ok_or(DecodeError::MissingRequest)?;

    let uid = request.uid.ok_or(DecodeError::MissingUid)?;
    let object = request.object.ok_or(DecodeError::MissingObject)?;
    let kind = request.kind.and_then(|gvk| gvk.kind);
    let resource_kind = kind.as_deref().and_then(ResourceKind::from_kind);

    Ok(ReviewRequest {
        uid,
        resource_kind,
        kind,
        object,
        api_version: review.api_version,
    })
}

/// Best-effort uid extraction from a body that failed to decode.
///
/// The engine fails open on malformed requests, but the caller can only
/// correlate the response if the uid is echoed. This digs the uid out of
/// whatever JSON structure is there, if any.
pub fn extract_uid(raw: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(raw).ok()?;
    value
        .pointer("/request/uid")?
        .as_str()
        .map(|uid| uid.to_owned())
}

/// The outbound AdmissionReview envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionReviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    pub response: AdmissionResponse,
}

impl AdmissionReviewResponse {
    /// Wrap a response, echoing the envelope version the caller declared.
    pub fn new(api_version: Option<String>, response: AdmissionResponse) -> Self {
        AdmissionReviewResponse {
            kind: Some(String::from(ADMISSION_REVIEW_KIND)),
            api_version: api_version.or_else(|| Some(String::from(ADMISSION_REVIEW_API_VERSION))),
            response,
        }
    }
}
