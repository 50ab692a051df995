use super::node::NodeRecord;
use crate::error::FlowError;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// An ordered, flat sequence of node records, exactly as stored on disk.
///
/// Containment is expressed through each record's `z` back-reference, not by nesting,
/// so the graph is just a list whose order is preserved from load to save.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlowGraph {
    pub nodes: Vec<NodeRecord>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<NodeRecord>) -> Self {
        Self { nodes }
    }

    /// Decodes a graph from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| FlowError::MalformedInput(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Decodes a graph from an already-parsed JSON value, which must be an array of
    /// objects that each carry string `id` and `type` fields.
    pub fn from_value(value: Value) -> Result<Self, FlowError> {
        let Value::Array(entries) = value else {
            return Err(FlowError::MalformedInput(
                "expected a JSON array of node records".to_string(),
            ));
        };

        let nodes = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(fields) => NodeRecord::from_fields(fields).map_err(|e| match e {
                    FlowError::MalformedInput(message) => {
                        FlowError::MalformedInput(format!("record at index {}: {}", index, message))
                    }
                    other => other,
                }),
                other => Err(FlowError::MalformedInput(format!(
                    "record at index {} is not an object: {}",
                    index, other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { nodes })
    }

    /// Encodes the graph with four-space indentation. Non-ASCII text is written as-is.
    pub fn to_json_pretty(&self) -> Result<String, FlowError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| FlowError::MalformedInput(format!("failed to encode flow: {}", e)))?;
        String::from_utf8(buffer)
            .map_err(|e| FlowError::MalformedInput(format!("encoded flow is not UTF-8: {}", e)))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Records owned by the given container.
    pub fn children_of<'a>(&'a self, container_id: &'a str) -> impl Iterator<Item = &'a NodeRecord> {
        self.nodes
            .iter()
            .filter(move |n| n.container_id() == Some(container_id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeRecord> {
        self.nodes.iter()
    }
}

impl FromIterator<NodeRecord> for FlowGraph {
    fn from_iter<I: IntoIterator<Item = NodeRecord>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
