//! # flownorm - Action/Group Normalization for Flow Definitions
//!
//! **flownorm** rewrites a serialized flow graph (a flat JSON array of node records) so
//! that every record taking part in message dispatch carries an explicit `action` and
//! `group`, inferred from the node's name when it is missing.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Decode a flow file into a [`FlowGraph`](flow::FlowGraph), either with
//!     [`store::load_graph`] or from JSON text you already hold.
//! 2.  **Configure**: Start from [`NormalizerConfig::default`](config::NormalizerConfig) or
//!     load one from JSON. It carries the keyword tables, the header marker, the router
//!     actions and the examples container id.
//! 3.  **Mutate**: Build a [`Normalizer`](normalizer::Normalizer) and call `mutate`. Every
//!     record is routed to the rule for its kind:
//!     - buttons get a routable `topic` plus `action`/`group`,
//!     - processing nodes get a header that defaults `msg.action` and `msg.group`,
//!     - emitter nodes get `action`/`group` string properties.
//!
//!     Graphs without the examples container get one appended.
//! 4.  **Save**: Write the graph back with [`store::save_graph`].
//!
//! Every rule is guarded, so running `mutate` on its own output reports zero changes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flownorm::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph = FlowGraph::from_json(r#"[
//!         { "id": "b1", "type": "ui-button", "label": "Visa Kylar", "wires": [[]] },
//!         { "id": "f1", "type": "function", "name": "Get Alarms",
//!           "func": "// header\nreturn msg;", "wires": [[]] }
//!     ]"#)?;
//!
//!     let normalizer = Normalizer::builder(NormalizerConfig::default()).build()?;
//!     let normalized = normalizer.mutate(graph);
//!
//!     println!("{}", normalized.report);
//!     println!("{}", normalized.graph.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod flow;
pub mod normalizer;
pub mod prelude;
pub mod rules;
pub mod store;
pub mod subgraph;
