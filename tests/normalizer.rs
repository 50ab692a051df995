//! Tests for whole-graph normalization.
mod common;

use common::*;
use flownorm::config::DEFAULT_SUBGRAPH_ID;
use flownorm::normalizer::changed;
use flownorm::prelude::*;
use serde_json::json;

#[test]
fn test_mutate_sample_graph() {
    let normalizer = default_normalizer();
    let normalized = normalizer.mutate(create_sample_graph());

    assert_eq!(normalized.modified_count(), 4);
    assert!(normalized.subgraph_added());
    assert!(normalized.report.failures.is_empty());

    let graph = &normalized.graph;
    assert_eq!(graph.len(), 6 + normalized.report.records_appended);
    assert_eq!(
        graph.find("b1").unwrap().text(field::TOPIC).unwrap(),
        Some("showKylar")
    );
    assert_eq!(
        property_pairs(graph.find("i1").unwrap()),
        vec![
            ("action".to_string(), "showMachines".to_string()),
            ("group".to_string(), "Machines".to_string()),
        ]
    );

    let changed_ids = normalized
        .report
        .changes
        .iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(changed_ids, vec!["b1", "f1", "f2", "i1"]);
}

#[test]
fn test_mutate_preserves_order_and_unrelated_records() {
    let input = create_sample_graph();
    let normalized = default_normalizer().mutate(input.clone());

    let ids_before = input.iter().map(NodeRecord::id).collect::<Vec<_>>();
    let ids_after = normalized
        .graph
        .iter()
        .take(input.len())
        .map(NodeRecord::id)
        .collect::<Vec<_>>();
    assert_eq!(ids_before, ids_after);

    assert_eq!(normalized.graph.find("tab1"), input.find("tab1"));
    assert_eq!(normalized.graph.find("s1"), input.find("s1"));
    for node in normalized.graph.iter().take(input.len()) {
        let original = input.find(node.id()).unwrap();
        assert_eq!(node.get(field::WIRES), original.get(field::WIRES));
        assert_eq!(node.node_type(), original.node_type());
    }
}

#[test]
fn test_mutate_is_idempotent() {
    let normalizer = default_normalizer();
    let first = normalizer.mutate(create_sample_graph());
    let second = normalizer.mutate(first.graph.clone());

    assert_eq!(second.modified_count(), 0);
    assert!(!second.subgraph_added());
    assert!(second.report.is_noop());
    assert_eq!(second.graph, first.graph);
}

#[test]
fn test_every_processing_body_has_exactly_one_header() {
    let normalizer = default_normalizer();
    let graph = normalizer.mutate(create_sample_graph()).graph;

    let processing = graph
        .iter()
        .filter(|n| normalizer.kind_of(n) == NodeKind::Processing)
        .collect::<Vec<_>>();
    assert_eq!(processing.len(), 2 + 4);
    for node in processing {
        assert_eq!(marker_count(node), 1, "node {}", node.id());
    }
}

#[test]
fn test_existing_examples_container_is_not_duplicated() {
    let normalizer = default_normalizer();
    let graph = FlowGraph::new(vec![
        record(json!({ "id": DEFAULT_SUBGRAPH_ID, "type": "tab", "label": "Examples" })),
        button("b1", "Larm"),
    ]);

    let (graph, modified, added) = normalizer.mutate(graph).into_parts();

    assert!(!added);
    assert_eq!(modified, 1);
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_subgraph_disabled() {
    let normalized = rules_only_normalizer().mutate(create_sample_graph());

    assert!(!normalized.subgraph_added());
    assert_eq!(normalized.graph.len(), 6);
    assert!(!normalized.graph.contains_id(DEFAULT_SUBGRAPH_ID));
}

#[test]
fn test_empty_graph_only_gets_examples() {
    let normalized = default_normalizer().mutate(FlowGraph::default());

    assert_eq!(normalized.modified_count(), 0);
    assert!(normalized.subgraph_added());
    assert!(!normalized.report.is_noop());
    assert_eq!(normalized.graph.nodes[0].id(), DEFAULT_SUBGRAPH_ID);
}

#[test]
fn test_failing_node_is_isolated() {
    let graph = FlowGraph::new(vec![
        record(json!({ "id": "bad", "type": "function", "name": "Broken", "func": ["x"] })),
        function("f2", "Hämta maskiner", "return msg;"),
        inject("i1", "Alarm", json!({ "not": "an array" })),
    ]);
    let input = graph.clone();

    let normalized = rules_only_normalizer().mutate(graph);

    assert_eq!(normalized.modified_count(), 1);
    assert_eq!(normalized.report.failures.len(), 2);
    assert_eq!(normalized.report.failures[0].id, "bad");
    assert_eq!(normalized.report.failures[1].id, "i1");
    assert_eq!(normalized.graph.find("bad"), input.find("bad"));
    assert_eq!(normalized.graph.find("i1"), input.find("i1"));
    assert_eq!(marker_count(normalized.graph.find("f2").unwrap()), 1);
}

#[test]
fn test_normalize_node_does_not_touch_input() {
    let normalizer = rules_only_normalizer();
    let node = function("f1", "Get Alarms", "return msg;");

    let (updated, outcome) = normalizer.normalize_node(&node).unwrap().unwrap();

    assert_eq!(node.text(field::BODY).unwrap(), Some("return msg;"));
    assert!(changed(&node, &updated));
    assert!(matches!(outcome, RuleOutcome::Applied { .. }));
    assert!(normalizer.normalize_node(&updated).unwrap().is_none());
}

#[test]
fn test_records_without_rules_pass_through() {
    let normalizer = rules_only_normalizer();
    let comment = record(json!({ "id": "c1", "type": "comment", "name": "Larm" }));
    let unknown = record(json!({ "id": "x1", "type": "ui-gauge", "label": "Kylar" }));

    assert!(normalizer.normalize_node(&comment).unwrap().is_none());
    assert!(normalizer.normalize_node(&unknown).unwrap().is_none());
    assert_eq!(normalizer.kind_of(&unknown), NodeKind::Other);
}

#[test]
fn test_type_mapping_extends_kinds() {
    let normalizer = Normalizer::builder(NormalizerConfig::default())
        .with_type_mapping("ui-switch", NodeKind::Button)
        .build()
        .unwrap();
    let node = record(json!({ "id": "u1", "type": "ui-switch", "label": "Frysar" }));

    let (updated, _) = normalizer.normalize_node(&node).unwrap().unwrap();

    assert_eq!(updated.text(field::TOPIC).unwrap(), Some("showFrysar"));
}

#[test]
fn test_type_overrides_from_config() {
    let config = NormalizerConfig::from_json(r#"{ "type_overrides": { "my-fn": "processing" } }"#)
        .unwrap();
    let normalizer = Normalizer::new(config).unwrap();
    let node = record(json!({ "id": "m1", "type": "my-fn", "func": "return msg;" }));

    assert_eq!(normalizer.kind_of(&node), NodeKind::Processing);
    assert!(normalizer.normalize_node(&node).unwrap().is_some());
}

struct RouterLabelRule;

impl NodeRule for RouterLabelRule {
    fn kind(&self) -> NodeKind {
        NodeKind::Router
    }

    fn apply(
        &self,
        node: &mut NodeRecord,
        config: &NormalizerConfig,
    ) -> std::result::Result<RuleOutcome, NodeProcessingError> {
        if node.has_value(field::ACTION) {
            return Ok(RuleOutcome::Untouched);
        }
        let classification = config
            .processing_table
            .classify(node.name().unwrap_or_default());
        node.set_field(field::ACTION, classification.action.as_str());
        Ok(RuleOutcome::Applied {
            classification,
            detail: "routed".to_string(),
        })
    }
}

struct RewiringRule;

impl NodeRule for RewiringRule {
    fn kind(&self) -> NodeKind {
        NodeKind::Router
    }

    fn apply(
        &self,
        node: &mut NodeRecord,
        _config: &NormalizerConfig,
    ) -> std::result::Result<RuleOutcome, NodeProcessingError> {
        node.set_field(field::WIRES, json!([]));
        Ok(RuleOutcome::Applied {
            classification: Classification::new("x", "y"),
            detail: "rewired".to_string(),
        })
    }
}

#[test]
fn test_custom_rule() {
    let normalizer = Normalizer::builder(NormalizerConfig::default())
        .with_custom_rule(Box::new(RouterLabelRule))
        .build()
        .unwrap();
    let graph = FlowGraph::new(vec![record(json!({
        "id": "s1", "type": "switch", "name": "Kylar router", "wires": [[]]
    }))]);

    let normalized = normalizer.mutate(graph);

    let router = normalized.graph.find("s1").unwrap();
    assert_eq!(router.text(field::ACTION).unwrap(), Some("showKylar"));
    assert_eq!(normalized.report.changes[0].detail, "routed");
    assert_eq!(normalized.report.changes[0].kind, NodeKind::Router);
}

#[test]
fn test_rule_touching_wires_is_rejected() {
    let normalizer = Normalizer::builder(NormalizerConfig::default())
        .with_custom_rule(Box::new(RewiringRule))
        .build()
        .unwrap();
    let node = record(json!({ "id": "s1", "type": "switch", "wires": [["a"]] }));

    let err = normalizer.normalize_node(&node).unwrap_err();

    assert_eq!(
        err,
        NodeProcessingError::ProtectedField {
            node_id: "s1".to_string(),
            field: "wires".to_string(),
        }
    );
}

#[test]
fn test_changed_is_order_sensitive_for_sequences() {
    let before = inject(
        "i1",
        "x",
        json!([{ "p": "action", "v": "a" }, { "p": "group", "v": "g" }]),
    );
    let reordered = before.clone().with_field(
        field::PROPERTIES,
        json!([{ "p": "group", "v": "g" }, { "p": "action", "v": "a" }]),
    );

    assert!(!changed(&before, &before.clone()));
    assert!(changed(&before, &reordered));
}

#[test]
fn test_report_display() {
    let normalized = default_normalizer().mutate(FlowGraph::new(vec![button("b1", "Visa Kylar")]));
    let text = normalized.report.to_string();

    assert!(text.contains("  -> Updated ui-button 'Visa Kylar': set topic, action, group (showKylar → Kylar)"));
    assert!(text.contains("  -> Added examples container with 10 records"));
    assert!(text.ends_with("1 nodes modified"));
}

#[test]
fn test_invalid_config_is_rejected_by_builder() {
    let config = NormalizerConfig {
        marker: "MISSING".to_string(),
        ..NormalizerConfig::default()
    };

    assert!(matches!(
        Normalizer::new(config),
        Err(ConfigError::MarkerNotInHeader { .. })
    ));
}
