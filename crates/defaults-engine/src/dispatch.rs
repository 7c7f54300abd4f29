use crate::admission_review::ResourceKind;
use crate::rules::{ContainerLimitsRule, DefaultingRule, NoopRule, StorageClassRule};

/// Map a resource kind to the rule that defaults it.
///
/// The match over `ResourceKind` is exhaustive: a new kind cannot be added
/// without wiring up its rule. Requests that declared no recognizable kind
/// get the no-op rule, the engine never rejects on dispatch.
pub fn rule_for(kind: Option<ResourceKind>) -> &'static dyn DefaultingRule {
    match kind {
        Some(ResourceKind::PersistentVolumeClaim) => &StorageClassRule,
        Some(ResourceKind::Pod) => &ContainerLimitsRule,
        None => &NoopRule,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pvc_requests_are_defaulted_by_the_storage_class_rule() {
        let rule = rule_for(Some(ResourceKind::PersistentVolumeClaim));

        let ops = rule.evaluate(&json!({"spec": {}}));
        assert_eq!(ops[0].path, "/spec/storageClassName");
    }

    #[test]
    fn pod_requests_are_defaulted_by_the_container_limits_rule() {
        let rule = rule_for(Some(ResourceKind::Pod));

        let ops = rule.evaluate(&json!({"spec": {"containers": [{"name": "a"}]}}));
        assert_eq!(ops[0].path, "/spec/containers/0/resources");
    }

    #[test]
    fn unrecognized_kinds_get_the_noop_rule() {
        let rule = rule_for(None);

        assert!(rule.evaluate(&json!({"spec": {}})).is_empty());
    }
}
