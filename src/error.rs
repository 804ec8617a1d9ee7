// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a pipeline run (fetch → write).
///
/// Row-level parse problems and rejected triples are not errors: they are
/// counted and logged by the stage that drops them.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("fetch of {url} failed after {attempts} attempt(s): {message}")]
    Transport {
        url: String,
        attempts: u32,
        message: String,
    },

    #[error("no table rows found in source markup")]
    NoRows,

    #[error("no disease-symptom pairs extracted from {rows} table rows")]
    NoTriples { rows: usize },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Failures on the snapshot store (write side and read side).
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("no mappings file found in {}", .0.display())]
    NoMappings(PathBuf),

    #[error("missing snapshot artifact: {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("snapshot file already exists: {}", .0.display())]
    Exists(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("malformed {} (line {line}): {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by the batch command line.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
