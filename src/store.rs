//! Reading and writing flow files, and normalizing several of them in one go.
//!
//! Each file is handled in isolation: a missing file is skipped, a file that cannot be
//! decoded is reported and left untouched on disk, and neither stops the batch.

use crate::error::FlowError;
use crate::flow::FlowGraph;
use crate::normalizer::{NormalizeReport, Normalizer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Loads a graph from a JSON flow file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<FlowGraph, FlowError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        FlowError::MalformedInput(format!("'{}' is not valid UTF-8: {}", path.display(), e))
    })?;
    FlowGraph::from_json(&content)
}

/// Writes a graph as pretty JSON. The file is only touched once encoding succeeded.
pub fn save_graph(path: impl AsRef<Path>, graph: &FlowGraph) -> Result<(), FlowError> {
    let path = path.as_ref();
    let json = graph.to_json_pretty()?;
    fs::write(path, json).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, error: std::io::Error) -> FlowError {
    if error.kind() == ErrorKind::NotFound {
        FlowError::MissingSource {
            path: path.display().to_string(),
        }
    } else {
        FlowError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Normalize and report, but never write.
    pub dry_run: bool,
}

/// What happened to one file of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// The file was normalized. `written` is false for dry runs and for files that
    /// were already normalized.
    Normalized {
        report: NormalizeReport,
        written: bool,
    },
    /// The file does not exist.
    Skipped,
    /// The file could not be read, decoded or written.
    Failed(FlowError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl BatchSummary {
    pub fn total_modified(&self) -> usize {
        self.files
            .iter()
            .map(|(_, outcome)| match outcome {
                FileOutcome::Normalized { report, .. } => report.modified_count(),
                _ => 0,
            })
            .sum()
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, outcome)| matches!(outcome, FileOutcome::Failed(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, outcome)| matches!(outcome, FileOutcome::Skipped))
            .count()
    }

    /// True when at least one file failed and none was normalized. Missing files are
    /// skipped, not failed.
    pub fn all_failed(&self) -> bool {
        self.failed_count() > 0
            && self
                .files
                .iter()
                .all(|(_, outcome)| !matches!(outcome, FileOutcome::Normalized { .. }))
    }
}

/// Loads, normalizes and, when something changed, saves a single file.
pub fn normalize_file(
    normalizer: &Normalizer,
    path: &Path,
    options: BatchOptions,
) -> Result<(NormalizeReport, bool), FlowError> {
    let graph = load_graph(path)?;
    let normalized = normalizer.mutate(graph);

    let write = !options.dry_run && !normalized.report.is_noop();
    if write {
        save_graph(path, &normalized.graph)?;
    }
    Ok((normalized.report, write))
}

/// Normalizes every file in `paths`, in order.
pub fn normalize_files<I, P>(
    normalizer: &Normalizer,
    paths: I,
    options: BatchOptions,
) -> BatchSummary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = BatchSummary::default();

    for path in paths {
        let path = path.as_ref();
        info!(path = %path.display(), "loading flow file");

        let outcome = match normalize_file(normalizer, path, options) {
            Ok((report, written)) => {
                info!(
                    path = %path.display(),
                    modified = report.modified_count(),
                    subgraph_added = report.subgraph_added,
                    written,
                    "flow file normalized"
                );
                FileOutcome::Normalized { report, written }
            }
            Err(FlowError::MissingSource { .. }) => {
                warn!(path = %path.display(), "flow file not found, skipping");
                FileOutcome::Skipped
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to process flow file");
                FileOutcome::Failed(error)
            }
        };
        summary.files.push((path.to_path_buf(), outcome));
    }

    summary
}
