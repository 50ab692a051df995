use super::property::Property;
use crate::error::{FlowError, NodeProcessingError};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

/// Wire names of the record fields the normalizer reads or writes.
pub mod field {
    pub const ID: &str = "id";
    pub const TYPE: &str = "type";
    pub const CONTAINER: &str = "z";
    pub const NAME: &str = "name";
    pub const LABEL: &str = "label";
    pub const TOPIC: &str = "topic";
    pub const ACTION: &str = "action";
    pub const GROUP: &str = "group";
    pub const BODY: &str = "func";
    pub const PROPERTIES: &str = "props";
    pub const WIRES: &str = "wires";
    pub const INFO: &str = "info";
}

/// One vertex of a flow graph.
///
/// The record keeps every key it was decoded with, in the original order, so that
/// fields the normalizer knows nothing about survive a load/save cycle untouched.
/// `id` and `type` are guaranteed to be strings and cannot be rewritten.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct NodeRecord {
    fields: Map<String, Value>,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(field::ID.to_string(), Value::String(id.into()));
        fields.insert(field::TYPE.to_string(), Value::String(node_type.into()));
        Self { fields }
    }

    /// Wraps a decoded key/value mapping, checking that `id` and `type` are strings.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, FlowError> {
        for key in [field::ID, field::TYPE] {
            match fields.get(key) {
                Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(FlowError::MalformedInput(format!(
                        "record field '{}' must be a string, found {}",
                        key, other
                    )));
                }
                None => {
                    return Err(FlowError::MalformedInput(format!(
                        "record is missing the '{}' field",
                        key
                    )));
                }
            }
        }
        Ok(Self { fields })
    }

    /// Builder-style variant of [`NodeRecord::set_field`].
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn id(&self) -> &str {
        self.str_field(field::ID).unwrap_or_default()
    }

    pub fn node_type(&self) -> &str {
        self.str_field(field::TYPE).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field(field::NAME)
    }

    pub fn label(&self) -> Option<&str> {
        self.str_field(field::LABEL)
    }

    pub fn container_id(&self) -> Option<&str> {
        self.str_field(field::CONTAINER)
    }

    /// A human-readable handle for log lines: name, then label, then id.
    pub fn title(&self) -> &str {
        [self.name(), self.label()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.id())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Reads a text field. Absent and `null` both read as `None`; any other
    /// non-string value is an error.
    pub fn text(&self, key: &str) -> Result<Option<&str>, NodeProcessingError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(NodeProcessingError::FieldType {
                node_id: self.id().to_string(),
                field: key.to_string(),
                expected: "a string",
            }),
        }
    }

    /// Like [`NodeRecord::text`], but whitespace-only strings read as `None`.
    pub fn non_empty_text(&self, key: &str) -> Result<Option<&str>, NodeProcessingError> {
        Ok(self.text(key)?.filter(|s| !s.trim().is_empty()))
    }

    /// Whether the field holds a value that counts as "set": anything except a
    /// missing key, `null`, an empty string, an empty array or an empty object.
    pub fn has_value(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(_) => true,
        }
    }

    /// Writes a field, keeping its position when the key already exists.
    /// `id` and `type` are immutable; attempts to write them are ignored.
    pub fn set_field(&mut self, key: &str, value: impl Into<Value>) {
        if key == field::ID || key == field::TYPE {
            warn!(node_id = self.id(), key, "refusing to overwrite an immutable field");
            return;
        }
        self.fields.insert(key.to_string(), value.into());
    }

    /// Decodes the property sequence. A missing or `null` sequence is empty.
    pub fn properties(&self) -> Result<Vec<Property>, NodeProcessingError> {
        let entries = match self.fields.get(field::PROPERTIES) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(NodeProcessingError::FieldType {
                    node_id: self.id().to_string(),
                    field: field::PROPERTIES.to_string(),
                    expected: "an array",
                });
            }
        };

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Property::deserialize(entry).map_err(|e| NodeProcessingError::InvalidProperty {
                    node_id: self.id().to_string(),
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Appends entries to the end of the property sequence without re-encoding the
    /// entries that are already there.
    pub fn append_properties(&mut self, additions: &[Property]) -> Result<(), NodeProcessingError> {
        let encoded = additions
            .iter()
            .map(Property::to_value)
            .collect::<Vec<_>>();

        match self.fields.get_mut(field::PROPERTIES) {
            Some(Value::Array(entries)) => entries.extend(encoded),
            None | Some(Value::Null) => {
                self.fields
                    .insert(field::PROPERTIES.to_string(), Value::Array(encoded));
            }
            Some(_) => {
                return Err(NodeProcessingError::FieldType {
                    node_id: self.id().to_string(),
                    field: field::PROPERTIES.to_string(),
                    expected: "an array",
                });
            }
        }
        Ok(())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Map<String, Value>> for NodeRecord {
    type Error = FlowError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<NodeRecord> for Value {
    fn from(node: NodeRecord) -> Self {
        Value::Object(node.fields)
    }
}

impl Serialize for NodeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
