use super::header::{contains_marker, render_header};
use super::insertion::{find_insertion_point, splice};
use super::{NodeRule, RuleOutcome};
use crate::config::NormalizerConfig;
use crate::error::NodeProcessingError;
use crate::flow::{NodeKind, NodeRecord, field};
use tracing::debug;

/// Inserts the normalization header into processing bodies that lack one.
///
/// The action/group defaults are inferred from the node name. The header goes after
/// any leading comment block so that banner comments stay on top.
pub struct ProcessingRule;

impl NodeRule for ProcessingRule {
    fn kind(&self) -> NodeKind {
        NodeKind::Processing
    }

    fn apply(
        &self,
        node: &mut NodeRecord,
        config: &NormalizerConfig,
    ) -> Result<RuleOutcome, NodeProcessingError> {
        let body = node.text(field::BODY)?.unwrap_or_default();
        if contains_marker(body, &config.marker) {
            debug!(node_id = node.id(), "header already present");
            return Ok(RuleOutcome::Untouched);
        }

        let classification = config
            .processing_table
            .classify(node.name().unwrap_or_default());
        let header = render_header(&config.header_title, &classification);
        let point = find_insertion_point(body);
        let new_body = splice(body, &header, point);

        debug!(node_id = node.id(), ?point, %classification, "inserting header");
        node.set_field(field::BODY, new_body);

        Ok(RuleOutcome::Applied {
            detail: format!("header inserted ({})", classification),
            classification,
        })
    }
}
