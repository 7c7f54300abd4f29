use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::errors::EncodeError;
use crate::patch::PatchOp;

/// This models the admission/v1/AdmissionResponse object of Kubernetes
/// See https://pkg.go.dev/k8s.io/kubernetes/pkg/apis/admission#AdmissionResponse
///
/// The engine only ever defaults missing fields, so `allowed` is always true
/// and the status/denial machinery of the full object is not carried.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    /// UID is an identifier for the individual request/response.
    /// This must be copied over from the corresponding AdmissionRequest.
    pub uid: String,

    /// Always true: the engine never denies a request.
    pub allowed: bool,

    /// The type of Patch. Currently we only allow "JSONPatch".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_type: Option<PatchType>,

    /// The patch body. Base64 of a JSON array of RFC 6902 operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

/// PatchType is the type of patch being used to represent the mutated object
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub enum PatchType {
    #[serde(rename = "JSONPatch")]
    #[default]
    JSONPatch,
}

impl AdmissionResponse {
    /// An acceptance without mutation. Omitting `patch` and `patchType` is
    /// the no-op signal to the API server.
    pub fn allow(uid: String) -> AdmissionResponse {
        AdmissionResponse {
            uid,
            allowed: true,
            patch_type: None,
            patch: None,
        }
    }

    /// An acceptance carrying the given patch operations.
    ///
    /// Empty operation lists fall back to a plain acceptance, `patch` and
    /// `patchType` are set together or not at all. Serialization is
    /// deterministic: identical operations always yield an identical patch
    /// string.
    pub fn with_patch(uid: String, ops: &[PatchOp]) -> Result<AdmissionResponse, EncodeError> {
        if ops.is_empty() {
            return Ok(AdmissionResponse::allow(uid));
        }

        let payload = serde_json::to_vec(ops)?;

        Ok(AdmissionResponse {
            uid,
            allowed: true,
            patch_type: Some(PatchType::JSONPatch),
            patch: Some(general_purpose::STANDARD.encode(payload)),
        })
    }
}
