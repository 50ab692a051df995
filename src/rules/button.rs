use super::{NodeRule, RuleOutcome};
use crate::classify::Classification;
use crate::config::NormalizerConfig;
use crate::error::NodeProcessingError;
use crate::flow::{NodeKind, NodeRecord, field};
use tracing::debug;

/// Gives dashboard buttons a routable `topic` and explicit `action`/`group` fields.
///
/// A button that already carries both `action` and `group` is left alone. A single
/// explicit value wins over inference for its half; the rest comes from the label,
/// then the name. Existing values are never overwritten.
pub struct ButtonRule;

impl NodeRule for ButtonRule {
    fn kind(&self) -> NodeKind {
        NodeKind::Button
    }

    fn apply(
        &self,
        node: &mut NodeRecord,
        config: &NormalizerConfig,
    ) -> Result<RuleOutcome, NodeProcessingError> {
        let explicit_action = node.non_empty_text(field::ACTION)?.map(str::to_string);
        let explicit_group = node.non_empty_text(field::GROUP)?.map(str::to_string);
        if explicit_action.is_some() && explicit_group.is_some() {
            return Ok(RuleOutcome::Untouched);
        }
        let has_topic = node.has_value(field::TOPIC);

        let inferred = config
            .button_table
            .classify_first([node.label(), node.name()].into_iter().flatten());
        let classification = Classification {
            action: explicit_action.clone().unwrap_or(inferred.action),
            group: explicit_group.clone().unwrap_or(inferred.group),
        };

        let mut written = Vec::new();
        if !has_topic {
            node.set_field(field::TOPIC, classification.action.as_str());
            written.push(field::TOPIC);
        }
        if explicit_action.is_none() {
            node.set_field(field::ACTION, classification.action.as_str());
            written.push(field::ACTION);
        }
        if explicit_group.is_none() {
            node.set_field(field::GROUP, classification.group.as_str());
            written.push(field::GROUP);
        }

        debug!(node_id = node.id(), %classification, ?written, "button classified");
        Ok(RuleOutcome::Applied {
            detail: format!("set {} ({})", written.join(", "), classification),
            classification,
        })
    }
}
