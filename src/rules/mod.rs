//! Per-kind mutation rules.
//!
//! Each rule inspects one record, decides whether it needs normalizing and, if so,
//! rewrites it in place. Rules never touch `id`, `type` or `wires`, and each one is
//! guarded so that running it on its own output changes nothing.

use crate::classify::Classification;
use crate::config::NormalizerConfig;
use crate::error::NodeProcessingError;
use crate::flow::{NodeKind, NodeRecord};
use ahash::AHashMap;

mod button;
mod emitter;
pub mod header;
pub mod insertion;
mod processing;

pub use button::ButtonRule;
pub use emitter::EmitterRule;
pub use processing::ProcessingRule;

/// What a rule did to the record it was given.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// The idempotency guard fired; the record was left as it was.
    Untouched,
    /// The rule resolved a classification and wrote the listed fields.
    Applied {
        classification: Classification,
        detail: String,
    },
}

/// Defines the contract for normalizing records of one [`NodeKind`].
pub trait NodeRule: Send + Sync {
    fn kind(&self) -> NodeKind;

    fn apply(
        &self,
        node: &mut NodeRecord,
        config: &NormalizerConfig,
    ) -> Result<RuleOutcome, NodeProcessingError>;
}

/// Registers the built-in rules. Router, comment and container records have none
/// and pass through unchanged.
pub(crate) fn register_default_rules(registry: &mut AHashMap<NodeKind, Box<dyn NodeRule>>) {
    let rules: [Box<dyn NodeRule>; 3] = [
        Box::new(ButtonRule),
        Box::new(ProcessingRule),
        Box::new(EmitterRule),
    ];
    for rule in rules {
        registry.insert(rule.kind(), rule);
    }
}
