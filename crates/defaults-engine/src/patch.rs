use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single RFC 6902 operation. Only "add" is ever emitted: the defaulting
/// rules fill in missing fields, they never remove or move existing ones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatchOp {
    pub op: PatchOpKind,
    pub path: String,
    pub value: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum PatchOpKind {
    #[serde(rename = "add")]
    Add,
}

impl PatchOp {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        PatchOp {
            op: PatchOpKind::Add,
            path: path.into(),
            value,
        }
    }
}
