//! Caller-supplied configuration for the normalizer.
//!
//! Every knob has a default matching the Reflink message standard, so a config file
//! only needs to list what it changes:
//!
//! ```json
//! {
//!     "marker": "SAFE HEADER",
//!     "router_actions": ["showControllers", "refresh"],
//!     "type_overrides": { "my-button": "button" }
//! }
//! ```

use crate::classify::{MappingEntry, MappingTable, defaults};
use crate::rules::header::render_header;
use crate::subgraph::templates;
use crate::error::ConfigError;
use crate::flow::TypeMapping;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MARKER: &str = "SAFE HEADER";
pub const DEFAULT_HEADER_TITLE: &str = "🛡️ SAFE HEADER - Reflink Message Standard";
pub const DEFAULT_SUBGRAPH_ID: &str = "reflink-examples-flow";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub button_table: MappingTable,
    pub processing_table: MappingTable,
    pub emitter_table: MappingTable,
    /// Exact, case-sensitive text whose presence marks a body as already normalized.
    pub marker: String,
    /// First line of every inserted header. Must contain `marker` exactly once.
    pub header_title: String,
    /// Identifier of the synthetic examples container.
    pub subgraph_id: String,
    /// Actions the synthetic router branches on, in order.
    pub router_actions: Vec<String>,
    pub generate_subgraph: bool,
    /// Extra `type` → kind entries, applied over the built-in mapping.
    pub type_overrides: TypeMapping,
    /// Seed for synthetic record ids. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            button_table: defaults::button_table(),
            processing_table: defaults::processing_table(),
            emitter_table: defaults::emitter_table(),
            marker: DEFAULT_MARKER.to_string(),
            header_title: DEFAULT_HEADER_TITLE.to_string(),
            subgraph_id: DEFAULT_SUBGRAPH_ID.to_string(),
            router_actions: defaults::router_actions(),
            generate_subgraph: true,
            type_overrides: TypeMapping::empty(),
            seed: None,
        }
    }
}

impl NormalizerConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.header_title.matches(self.marker.as_str()).count() != 1 {
            return Err(ConfigError::MarkerNotInHeader {
                title: self.header_title.clone(),
                marker: self.marker.clone(),
            });
        }
        if self.subgraph_id.trim().is_empty() {
            return Err(ConfigError::EmptySubgraphId);
        }
        self.check_marker_in_headers()?;
        if self.generate_subgraph {
            self.check_marker_in_examples()?;
        }
        Ok(())
    }

    /// Every header the tables can produce must carry the marker exactly once, so the
    /// action and group values may not contain it either.
    fn check_marker_in_headers(&self) -> Result<(), ConfigError> {
        let classifications = [
            &self.button_table,
            &self.processing_table,
            &self.emitter_table,
        ]
        .into_iter()
        .flat_map(|table| {
            table
                .entries
                .iter()
                .map(MappingEntry::classification)
                .chain(std::iter::once(table.fallback.clone()))
        });

        for classification in classifications {
            let header = render_header(&self.header_title, &classification);
            self.expect_single_marker(&header, || format!("header for {}", classification))?;
        }
        Ok(())
    }

    /// Generated handler bodies are checked the same way as inserted headers.
    fn check_marker_in_examples(&self) -> Result<(), ConfigError> {
        self.expect_single_marker(&templates::safe_handler_body(self), || {
            "safe handler body".to_string()
        })?;
        for example in templates::example_handlers() {
            self.expect_single_marker(&templates::example_body(&example, self), || {
                format!("{} example body", example.title)
            })?;
        }
        Ok(())
    }

    fn expect_single_marker(
        &self,
        text: &str,
        context: impl FnOnce() -> String,
    ) -> Result<(), ConfigError> {
        let count = text.matches(self.marker.as_str()).count();
        if count == 1 {
            Ok(())
        } else {
            Err(ConfigError::MarkerRepeated {
                marker: self.marker.clone(),
                context: context(),
                count,
            })
        }
    }
}
