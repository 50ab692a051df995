use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a record plays, resolved from its wire `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Dashboard buttons; routed by their `topic`.
    Button,
    /// Nodes that run a free-form code body.
    Processing,
    /// Nodes that emit messages built from a property sequence.
    Emitter,
    /// Nodes that branch on a message property.
    Router,
    Comment,
    /// Tabs that own other records through their `z` back-reference.
    Container,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Button => "button",
            NodeKind::Processing => "processing",
            NodeKind::Emitter => "emitter",
            NodeKind::Router => "router",
            NodeKind::Comment => "comment",
            NodeKind::Container => "container",
            NodeKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Wire type strings for the kinds the synthetic subgraph emits.
pub mod wire_type {
    pub const PROCESSING: &str = "function";
    pub const EMITTER: &str = "inject";
    pub const ROUTER: &str = "switch";
    pub const COMMENT: &str = "comment";
    pub const CONTAINER: &str = "tab";
}

/// Maps wire `type` strings onto [`NodeKind`]s. Unmapped types are `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping {
    kinds: AHashMap<String, NodeKind>,
}

impl TypeMapping {
    pub fn empty() -> Self {
        Self {
            kinds: AHashMap::new(),
        }
    }

    pub fn insert(&mut self, node_type: impl Into<String>, kind: NodeKind) {
        self.kinds.insert(node_type.into(), kind);
    }

    pub fn resolve(&self, node_type: &str) -> NodeKind {
        self.kinds.get(node_type).copied().unwrap_or(NodeKind::Other)
    }

    /// Adds every entry of `other`, overriding entries with the same type string.
    pub fn extend(&mut self, other: &TypeMapping) {
        self.kinds
            .extend(other.kinds.iter().map(|(k, v)| (k.clone(), *v)));
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        let mut mapping = Self::empty();
        mapping.insert("ui-button", NodeKind::Button);
        mapping.insert("ui_button", NodeKind::Button);
        mapping.insert(wire_type::PROCESSING, NodeKind::Processing);
        mapping.insert(wire_type::EMITTER, NodeKind::Emitter);
        mapping.insert(wire_type::ROUTER, NodeKind::Router);
        mapping.insert(wire_type::COMMENT, NodeKind::Comment);
        mapping.insert(wire_type::CONTAINER, NodeKind::Container);
        mapping
    }
}
