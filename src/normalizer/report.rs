use crate::error::NodeProcessingError;
use crate::flow::{NodeKind, NodeRecord};
use std::fmt;

/// Whether a rule actually changed a record. Sequences compare element by element,
/// so appending or reordering properties counts as a change.
pub fn changed(before: &NodeRecord, after: &NodeRecord) -> bool {
    before != after
}

/// A record that a rule modified.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeChange {
    pub id: String,
    pub node_type: String,
    pub kind: NodeKind,
    pub title: String,
    pub detail: String,
}

impl NodeChange {
    pub fn new(node: &NodeRecord, kind: NodeKind, detail: impl Into<String>) -> Self {
        Self {
            id: node.id().to_string(),
            node_type: node.node_type().to_string(),
            kind,
            title: node.title().to_string(),
            detail: detail.into(),
        }
    }
}

/// A record whose rule failed; it was left unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFailure {
    pub id: String,
    pub title: String,
    pub error: NodeProcessingError,
}

/// Everything one `mutate` pass did to a graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub changes: Vec<NodeChange>,
    pub failures: Vec<NodeFailure>,
    pub subgraph_added: bool,
    pub records_appended: usize,
}

impl NormalizeReport {
    pub fn modified_count(&self) -> usize {
        self.changes.len()
    }

    /// True when the graph came out exactly as it went in.
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty() && !self.subgraph_added
    }

    pub(crate) fn record_change(&mut self, change: NodeChange) {
        self.changes.push(change);
    }

    pub(crate) fn record_failure(&mut self, node: &NodeRecord, error: NodeProcessingError) {
        self.failures.push(NodeFailure {
            id: node.id().to_string(),
            title: node.title().to_string(),
            error,
        });
    }
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            writeln!(
                f,
                "  -> Updated {} '{}': {}",
                change.node_type, change.title, change.detail
            )?;
        }
        for failure in &self.failures {
            writeln!(f, "  -> Skipped '{}': {}", failure.title, failure.error)?;
        }
        if self.subgraph_added {
            writeln!(
                f,
                "  -> Added examples container with {} records",
                self.records_appended
            )?;
        }
        write!(f, "{} nodes modified", self.modified_count())
    }
}
