use serde_json::{json, Value};

use super::DefaultingRule;
use crate::patch::PatchOp;

/// Fills in compute resource defaults on Pod containers that do not declare
/// limits.
///
/// A container is patched when its `resources` field is absent, or present
/// without a `limits` sub-field. The patch replaces the whole `resources`
/// object with the defaults below, so a partial spec (e.g. requests without
/// limits) is overwritten rather than merged. Containers that already carry
/// `resources.limits` are skipped entirely.
pub struct ContainerLimitsRule;

fn default_resources() -> Value {
    json!({
        "limits": {
            "cpu": "500m",
            "memory": "512Mi",
        },
        "requests": {
            "cpu": "250m",
            "memory": "256Mi",
        },
    })
}

impl DefaultingRule for ContainerLimitsRule {
    fn evaluate(&self, object: &Value) -> Vec<PatchOp> {
        let containers = match object.pointer("/spec/containers").and_then(Value::as_array) {
            Some(containers) => containers,
            None => return Vec::new(),
        };

        containers
            .iter()
            .enumerate()
            .filter(|(_, container)| {
                container
                    .get("resources")
                    .map_or(true, |resources| resources.get("limits").is_none())
            })
            .map(|(index, _)| {
                PatchOp::add(
                    format!("/spec/containers/{index}/resources"),
                    default_resources(),
                )
            })
            .collect()
    }
}
