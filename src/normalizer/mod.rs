use crate::config::NormalizerConfig;
use crate::error::{ConfigError, NodeProcessingError};
use crate::flow::{FlowGraph, NodeKind, NodeRecord, TypeMapping, field};
use crate::rules::{NodeRule, RuleOutcome, register_default_rules};
use crate::subgraph::SubgraphGenerator;
use crate::subgraph::ids::IdAllocator;
use ahash::AHashMap;
use tracing::{debug, info, warn};

pub mod report;

pub use report::{NodeChange, NodeFailure, NormalizeReport, changed};

/// The result of one normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub graph: FlowGraph,
    pub report: NormalizeReport,
}

impl Normalized {
    pub fn modified_count(&self) -> usize {
        self.report.modified_count()
    }

    pub fn subgraph_added(&self) -> bool {
        self.report.subgraph_added
    }

    /// `(graph, modified count, subgraph added)`.
    pub fn into_parts(self) -> (FlowGraph, usize, bool) {
        let modified = self.report.modified_count();
        let added = self.report.subgraph_added;
        (self.graph, modified, added)
    }
}

pub struct Normalizer {
    config: NormalizerConfig,
    types: TypeMapping,
    rules: AHashMap<NodeKind, Box<dyn NodeRule>>,
}

pub struct NormalizerBuilder {
    config: NormalizerConfig,
    types: TypeMapping,
    rules: AHashMap<NodeKind, Box<dyn NodeRule>>,
}

impl NormalizerBuilder {
    pub fn new(config: NormalizerConfig) -> Self {
        let mut rules: AHashMap<NodeKind, Box<dyn NodeRule>> = AHashMap::new();
        register_default_rules(&mut rules);
        let mut types = TypeMapping::default();
        types.extend(&config.type_overrides);
        Self {
            config,
            types,
            rules,
        }
    }

    /// Treats records of `node_type` as `kind`.
    pub fn with_type_mapping(mut self, node_type: &str, kind: NodeKind) -> Self {
        self.types.insert(node_type, kind);
        self
    }

    /// Replaces the rule for the rule's kind.
    pub fn with_custom_rule(mut self, rule: Box<dyn NodeRule>) -> Self {
        self.rules.insert(rule.kind(), rule);
        self
    }

    pub fn build(self) -> Result<Normalizer, ConfigError> {
        self.config.validate()?;
        Ok(Normalizer {
            config: self.config,
            types: self.types,
            rules: self.rules,
        })
    }
}

impl Normalizer {
    pub fn builder(config: NormalizerConfig) -> NormalizerBuilder {
        NormalizerBuilder::new(config)
    }

    pub fn new(config: NormalizerConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn kind_of(&self, node: &NodeRecord) -> NodeKind {
        self.types.resolve(node.node_type())
    }

    /// Runs the matching rule against a copy of `node`.
    ///
    /// Returns `Ok(None)` when no rule applies or the rule left the record as it was.
    /// The input is never modified, so a failed rule cannot leave a half-edited record.
    pub fn normalize_node(
        &self,
        node: &NodeRecord,
    ) -> Result<Option<(NodeRecord, RuleOutcome)>, NodeProcessingError> {
        let Some(rule) = self.rules.get(&self.kind_of(node)) else {
            return Ok(None);
        };

        let mut candidate = node.clone();
        let outcome = rule.apply(&mut candidate, &self.config)?;
        ensure_protected_fields(node, &candidate)?;

        if changed(node, &candidate) {
            Ok(Some((candidate, outcome)))
        } else {
            Ok(None)
        }
    }

    /// Normalizes every record of `graph`, then appends the examples container if the
    /// graph does not have one yet.
    ///
    /// Records are processed independently. A record whose rule fails is kept as it
    /// was and listed in the report's failures; the rest of the graph is still processed.
    pub fn mutate(&self, graph: FlowGraph) -> Normalized {
        let mut report = NormalizeReport::default();
        let mut nodes = graph.nodes;

        for node in nodes.iter_mut() {
            match self.normalize_node(node) {
                Ok(Some((updated, outcome))) => {
                    let detail = match outcome {
                        RuleOutcome::Applied { detail, .. } => detail,
                        RuleOutcome::Untouched => String::from("updated"),
                    };
                    debug!(node_id = updated.id(), %detail, "node normalized");
                    let kind = self.kind_of(&updated);
                    report.record_change(NodeChange::new(&updated, kind, detail));
                    *node = updated;
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(node_id = node.id(), %error, "leaving node unmodified");
                    report.record_failure(node, error);
                }
            }
        }

        let subgraph_present = nodes.iter().any(|n| n.id() == self.config.subgraph_id);
        if !self.config.generate_subgraph {
            debug!("examples container disabled");
        } else if subgraph_present {
            debug!(id = %self.config.subgraph_id, "examples container already present");
        } else {
            let mut ids = IdAllocator::new(self.config.seed, nodes.iter().map(|n| n.id()));
            let records = SubgraphGenerator::new(&self.config).generate(&mut ids);
            info!(records = records.len(), "adding examples container");
            report.subgraph_added = true;
            report.records_appended = records.len();
            nodes.extend(records);
        }

        Normalized {
            graph: FlowGraph::new(nodes),
            report,
        }
    }
}

/// Rules may rewrite anything except the record's identity and its wiring.
fn ensure_protected_fields(
    before: &NodeRecord,
    after: &NodeRecord,
) -> Result<(), NodeProcessingError> {
    for key in [field::ID, field::TYPE, field::WIRES, field::CONTAINER] {
        if before.get(key) != after.get(key) {
            return Err(NodeProcessingError::ProtectedField {
                node_id: before.id().to_string(),
                field: key.to_string(),
            });
        }
    }
    Ok(())
}
