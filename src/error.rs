use thiserror::Error;

/// Errors that abort processing of a whole flow file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Malformed flow data: {0}")]
    MalformedInput(String),

    #[error("Flow file '{path}' does not exist")]
    MissingSource { path: String },

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised by a single mutation rule. These never abort the graph: the node
/// is left untouched and the failure is recorded in the report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeProcessingError {
    #[error("Node '{node_id}' has field '{field}' of unexpected type: expected {expected}")]
    FieldType {
        node_id: String,
        field: String,
        expected: &'static str,
    },

    #[error("Node '{node_id}' has an invalid property entry at index {index}: {message}")]
    InvalidProperty {
        node_id: String,
        index: usize,
        message: String,
    },

    #[error("Rule for node '{node_id}' tried to modify protected field '{field}'")]
    ProtectedField { node_id: String, field: String },
}

/// Errors produced while loading or validating a `NormalizerConfig`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config JSON: {0}")]
    Parse(String),

    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("The header marker must not be empty")]
    EmptyMarker,

    #[error("Header title '{title}' must contain the marker '{marker}' exactly once")]
    MarkerNotInHeader { title: String, marker: String },

    #[error("Marker '{marker}' occurs {count} times in the {context}, expected exactly once")]
    MarkerRepeated {
        marker: String,
        context: String,
        count: usize,
    },

    #[error("The synthetic subgraph identifier must not be empty")]
    EmptySubgraphId,
}
