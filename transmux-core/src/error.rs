//! Error types for the transmux-core library.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the core conversion pipeline.
///
/// Per-file errors (probe failures, destination conflicts, ffmpeg failures)
/// are caught at the worker boundary and turned into a `Failed` stats entry;
/// they never abort the run. Only `DependencyNotFound` is treated as fatal,
/// and only during the preflight check before any work begins.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} is not installed or not on PATH")]
    DependencyNotFound(String),

    #[error("failed to start {0}: {1}")]
    CommandStart(String, std::io::Error),

    #[error("{0} failed with status {1}")]
    CommandFailed(String, ExitStatus),

    #[error("failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("no video stream found")]
    NoVideoStream,

    #[error("destination '{0}' already exists (use --force to overwrite)")]
    DestinationExists(PathBuf),

    #[error("failed to create directory '{0}': {1}")]
    DirectoryCreation(PathBuf, std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid path: {0}")]
    PathError(String),

    #[error("no processable media files found")]
    NoFilesFound,

    #[error("operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
