use serde_json::Value;

use crate::patch::PatchOp;

mod container_limits;
mod storage_class;

pub use container_limits::ContainerLimitsRule;
pub use storage_class::StorageClassRule;

/// A defaulting rule inspects the object embedded in an admission request and
/// produces the patch operations needed to fill in its missing defaults.
///
/// Rules are pure: they hold no state, perform no I/O and are safe to share
/// across any number of concurrent requests.
pub trait DefaultingRule: Send + Sync {
    fn evaluate(&self, object: &Value) -> Vec<PatchOp>;
}

/// Applied when a request reaches the engine with a kind no rule covers.
/// The engine is fail-open: such requests are left untouched.
pub struct NoopRule;

impl DefaultingRule for NoopRule {
    fn evaluate(&self, _object: &Value) -> Vec<PatchOp> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn noop_rule_never_patches() {
        let object = json!({"spec": {}});
        assert!(NoopRule.evaluate(&object).is_empty());
    }
}
