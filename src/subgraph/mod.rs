//! The synthetic examples container appended to graphs that do not have one yet.
//!
//! The bundle is a container record followed by a documentation comment, the standalone
//! safe handler, an action router, three example handlers and three example emitters.
//! Every record except the container points at it through `z`.

pub mod ids;
pub mod templates;

use crate::classify::Classification;
use crate::config::NormalizerConfig;
use crate::flow::{NodeRecord, Property, field, wire_type};
use ids::IdAllocator;
use serde_json::{Value, json};
use templates::{example_body, example_handlers, safe_handler_body, standard_doc};

const CONTAINER_LABEL: &str = "📘 Reflink Examples";
const HANDLER_X: i64 = 100;
const ROUTER_X: i64 = 350;
const EMITTER_X: i64 = 130;

/// Builds the examples bundle for one configuration.
pub struct SubgraphGenerator<'a> {
    config: &'a NormalizerConfig,
}

impl<'a> SubgraphGenerator<'a> {
    pub fn new(config: &'a NormalizerConfig) -> Self {
        Self { config }
    }

    /// Produces the records in their output order. Ids come from `ids`, so they
    /// never clash with records already in the graph.
    pub fn generate(&self, ids: &mut IdAllocator) -> Vec<NodeRecord> {
        let container = self.config.subgraph_id.as_str();
        let mut records = vec![
            NodeRecord::new(container, wire_type::CONTAINER)
                .with_field(field::LABEL, CONTAINER_LABEL)
                .with_field("disabled", false)
                .with_field(
                    field::INFO,
                    "Best-practice examples for the Reflink message standard",
                ),
            self.doc_node(ids.allocate("reflink-std-doc")),
            self.processing_node(
                ids.allocate("safe-handler"),
                "🛡️ Universal Safe Handler",
                safe_handler_body(self.config),
                (HANDLER_X, 150),
            ),
            self.router_node(ids.allocate("action-router")),
        ];

        for (row, example) in example_handlers().iter().enumerate() {
            records.push(self.processing_node(
                ids.allocate(example.id_prefix),
                &format!("📘 Best Practice: {}", example.title),
                example_body(example, self.config),
                (HANDLER_X, 300 + 80 * row as i64),
            ));
        }

        let emitters = [
            (
                "inject-controllers",
                "Show Controllers",
                Classification::new("showControllers", "Controllers"),
            ),
            (
                "inject-machines",
                "Show Machines",
                Classification::new("showMachines", "Machines"),
            ),
            (
                "inject-alarms",
                "Show Alarms",
                Classification::new("showAlarms", "Alarms"),
            ),
        ];
        for (row, (prefix, name, classification)) in emitters.into_iter().enumerate() {
            records.push(self.emitter_node(
                ids.allocate(prefix),
                name,
                &classification,
                (EMITTER_X, 500 + 50 * row as i64),
            ));
        }

        records
    }

    fn owned(&self, id: String, node_type: &str, (x, y): (i64, i64)) -> NodeRecord {
        NodeRecord::new(id, node_type)
            .with_field(field::CONTAINER, self.config.subgraph_id.as_str())
            .with_field("x", x)
            .with_field("y", y)
    }

    fn doc_node(&self, id: String) -> NodeRecord {
        self.owned(id, wire_type::COMMENT, (HANDLER_X, 50))
            .with_field(field::NAME, "📚 REFLINK MESSAGE STANDARD v1.0")
            .with_field(field::INFO, standard_doc(self.config))
            .with_field(field::WIRES, json!([]))
    }

    fn processing_node(
        &self,
        id: String,
        name: &str,
        body: String,
        at: (i64, i64),
    ) -> NodeRecord {
        self.owned(id, wire_type::PROCESSING, at)
            .with_field(field::NAME, name)
            .with_field(field::BODY, body)
            .with_field("outputs", 1)
            .with_field("timeout", 0)
            .with_field("noerr", 0)
            .with_field("initialize", "")
            .with_field("finalize", "")
            .with_field("libs", json!([]))
            .with_field(field::WIRES, json!([[]]))
    }

    /// Exact-equality branches on every configured action, then a catch-all.
    fn router_node(&self, id: String) -> NodeRecord {
        let rules = self
            .config
            .router_actions
            .iter()
            .map(|action| json!({ "t": "eq", "v": action, "vt": "str" }))
            .chain(std::iter::once(json!({ "t": "else" })))
            .collect::<Vec<_>>();
        let outputs = rules.len();
        let wires = vec![json!([]); outputs];

        self.owned(id, wire_type::ROUTER, (ROUTER_X, 150))
            .with_field(field::NAME, "🔀 Action Router")
            .with_field("property", "action")
            .with_field("propertyType", "msg")
            .with_field("rules", Value::Array(rules))
            .with_field("checkall", "true")
            .with_field("repair", false)
            .with_field("outputs", outputs)
            .with_field(field::WIRES, Value::Array(wires))
    }

    fn emitter_node(
        &self,
        id: String,
        name: &str,
        classification: &Classification,
        at: (i64, i64),
    ) -> NodeRecord {
        let properties = [
            Property::string(field::ACTION, &classification.action),
            Property::string(field::GROUP, &classification.group),
            Property::typed("payload", Value::String(String::new()), "date"),
        ]
        .iter()
        .map(Property::to_value)
        .collect::<Vec<_>>();

        self.owned(id, wire_type::EMITTER, at)
            .with_field(field::NAME, name)
            .with_field(field::PROPERTIES, Value::Array(properties))
            .with_field("repeat", "")
            .with_field("crontab", "")
            .with_field("once", false)
            .with_field("onceDelay", 0.1)
            .with_field(field::TOPIC, "")
            .with_field(field::WIRES, json!([[]]))
    }
}
