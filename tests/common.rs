//! Common test utilities for building flow records and graphs.
use flownorm::prelude::*;
use serde_json::{Value, json};

/// Seed used by every test normalizer so generated ids are reproducible.
#[allow(dead_code)]
pub const TEST_SEED: u64 = 7;

/// A normalizer with the default configuration and a fixed id seed.
#[allow(dead_code)]
pub fn default_normalizer() -> Normalizer {
    let config = NormalizerConfig {
        seed: Some(TEST_SEED),
        ..NormalizerConfig::default()
    };
    Normalizer::new(config).expect("default config is valid")
}

/// A normalizer that never appends the examples container, for tests that only
/// look at per-node rules.
#[allow(dead_code)]
pub fn rules_only_normalizer() -> Normalizer {
    let config = NormalizerConfig {
        generate_subgraph: false,
        ..NormalizerConfig::default()
    };
    Normalizer::new(config).expect("default config is valid")
}

#[allow(dead_code)]
pub fn record(value: Value) -> NodeRecord {
    match value {
        Value::Object(fields) => NodeRecord::from_fields(fields).expect("valid record"),
        other => panic!("expected an object, got {}", other),
    }
}

#[allow(dead_code)]
pub fn button(id: &str, label: &str) -> NodeRecord {
    record(json!({
        "id": id,
        "type": "ui-button",
        "z": "tab1",
        "label": label,
        "wires": [["f1"]]
    }))
}

#[allow(dead_code)]
pub fn function(id: &str, name: &str, body: &str) -> NodeRecord {
    record(json!({
        "id": id,
        "type": "function",
        "z": "tab1",
        "name": name,
        "func": body,
        "outputs": 1,
        "wires": [["out"]]
    }))
}

#[allow(dead_code)]
pub fn inject(id: &str, name: &str, props: Value) -> NodeRecord {
    record(json!({
        "id": id,
        "type": "inject",
        "z": "tab1",
        "name": name,
        "props": props,
        "repeat": "",
        "once": false,
        "wires": [["f1"]]
    }))
}

/// A small dashboard flow: a tab, a button, two functions, an inject and a switch.
///
/// Nothing in it is normalized yet.
#[allow(dead_code)]
pub fn create_sample_graph() -> FlowGraph {
    FlowGraph::new(vec![
        record(json!({ "id": "tab1", "type": "tab", "label": "Dashboard" })),
        button("b1", "Visa Kylar"),
        function("f1", "Get Alarms", "// header\n// more\nreturn msg;"),
        function("f2", "Hämta maskiner", "const x = 1;\nreturn msg;"),
        inject("i1", "Show Machines", json!([])),
        record(json!({
            "id": "s1",
            "type": "switch",
            "z": "tab1",
            "property": "topic",
            "rules": [{ "t": "eq", "v": "a", "vt": "str" }],
            "wires": [["f2"]]
        })),
    ])
}

/// Number of times the default marker occurs in a processing body.
#[allow(dead_code)]
pub fn marker_count(node: &NodeRecord) -> usize {
    node.text(field::BODY)
        .expect("body is text")
        .unwrap_or_default()
        .matches(flownorm::config::DEFAULT_MARKER)
        .count()
}

/// The wire-level `(p, v)` pairs of a node's property sequence.
#[allow(dead_code)]
pub fn property_pairs(node: &NodeRecord) -> Vec<(String, String)> {
    node.properties()
        .expect("properties decode")
        .into_iter()
        .map(|p| (p.key.clone(), p.value_str().unwrap_or_default().to_string()))
        .collect()
}
