use serde_json::{json, Value};

use super::DefaultingRule;
use crate::patch::PatchOp;

pub const DEFAULT_STORAGE_CLASS: &str = "default-storage";

/// Fills in `spec.storageClassName` on PersistentVolumeClaims that do not
/// declare one.
///
/// The check is presence-only: a claim that sets the field to any value,
/// including the empty string, is left untouched. An empty string is a valid
/// way to opt out of dynamic provisioning, so it must not be overwritten.
pub struct StorageClassRule;

impl DefaultingRule for StorageClassRule {
    fn evaluate(&self, object: &Value) -> Vec<PatchOp> {
        if object.pointer("/spec/storageClassName").is_some() {
            return Vec::new();
        }

        vec![PatchOp::add(
            "/spec/storageClassName",
            json!(DEFAULT_STORAGE_CLASS),
        )]
    }
}
