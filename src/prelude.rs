//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flownorm crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flownorm::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let normalizer = Normalizer::new(NormalizerConfig::from_file("normalize.json")?)?;
//! let graph = load_graph("flows.json")?;
//! let normalized = normalizer.mutate(graph);
//! save_graph("flows.json", &normalized.graph)?;
//!
//! println!("{} nodes modified", normalized.modified_count());
//! # Ok(())
//! # }
//! ```

// Normalization
pub use crate::normalizer::{NormalizeReport, Normalized, Normalizer, NormalizerBuilder};
pub use crate::rules::{NodeRule, RuleOutcome};

// Flow model
pub use crate::flow::{FlowGraph, NodeKind, NodeRecord, Property, field};

// Classification and configuration
pub use crate::classify::{Classification, MappingEntry, MappingTable, classify};
pub use crate::config::NormalizerConfig;

// Storage
pub use crate::store::{BatchOptions, BatchSummary, FileOutcome, load_graph, save_graph};

// Error types
pub use crate::error::{ConfigError, FlowError, NodeProcessingError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
