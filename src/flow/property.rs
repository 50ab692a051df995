use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value type tag used for plain string properties.
pub const STRING_TYPE: &str = "str";

/// One `(key, value, valueType)` entry of an emitter node's property sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "p")]
    pub key: String,
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(rename = "vt", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    /// A string-typed property.
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::typed(key, Value::String(value.into()), STRING_TYPE)
    }

    pub fn typed(key: impl Into<String>, value: Value, value_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            value_type: Some(value_type.into()),
            extra: Map::new(),
        }
    }

    /// The value as text, when it is a string.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }

    /// Encodes the entry in wire order: `p`, `v`, `vt`, then any extra keys.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("p".to_string(), Value::String(self.key.clone()));
        if let Some(value) = &self.value {
            map.insert("v".to_string(), value.clone());
        }
        if let Some(value_type) = &self.value_type {
            map.insert("vt".to_string(), Value::String(value_type.clone()));
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}
