use super::{NodeRule, RuleOutcome};
use crate::config::NormalizerConfig;
use crate::error::NodeProcessingError;
use crate::flow::{NodeKind, NodeRecord, Property, field};
use tracing::debug;

/// Seeds `action`/`group` properties on emitter nodes.
///
/// Missing entries are appended as string properties after the existing ones, which
/// are never removed or reordered.
pub struct EmitterRule;

impl NodeRule for EmitterRule {
    fn kind(&self) -> NodeKind {
        NodeKind::Emitter
    }

    fn apply(
        &self,
        node: &mut NodeRecord,
        config: &NormalizerConfig,
    ) -> Result<RuleOutcome, NodeProcessingError> {
        let properties = node.properties()?;
        let has = |key: &str| properties.iter().any(|p| p.key == key);
        let has_action = has(field::ACTION);
        let has_group = has(field::GROUP);

        if has_action && has_group {
            return Ok(RuleOutcome::Untouched);
        }

        let classification = config
            .emitter_table
            .classify(node.name().unwrap_or_default());

        let mut additions = Vec::with_capacity(2);
        if !has_action {
            additions.push(Property::string(field::ACTION, &classification.action));
        }
        if !has_group {
            additions.push(Property::string(field::GROUP, &classification.group));
        }
        node.append_properties(&additions)?;

        debug!(
            node_id = node.id(),
            %classification,
            appended = additions.len(),
            "emitter properties seeded"
        );
        let keys = additions.iter().map(|p| p.key.as_str()).collect::<Vec<_>>();
        Ok(RuleOutcome::Applied {
            detail: format!("appended {} ({})", keys.join(", "), classification),
            classification,
        })
    }
}
