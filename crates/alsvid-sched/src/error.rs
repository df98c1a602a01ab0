//! Error handling for job preparation and submission.

use std::path::PathBuf;

use thiserror::Error;

use crate::policy::Queue;

/// Result type for job preparation and submission operations.
pub type SchedResult<T> = Result<T, SchedError>;

/// Errors that can occur while loading, validating, or submitting a job.
#[derive(Error, Debug)]
pub enum SchedError {
    /// Job configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Job configuration file exists but could not be parsed.
    #[error("Malformed configuration {}: {}", .path.display(), .message)]
    ConfigMalformed { path: PathBuf, message: String },

    /// A path the job depends on is missing or of the wrong kind.
    #[error("{role} not found: {}", .path.display())]
    PathMissing { role: &'static str, path: PathBuf },

    /// Queue name is not one of the known Polaris queues.
    #[error("Unknown queue '{0}' (valid queues: debug, debug-scaling, prod, preemptable, demand)")]
    UnknownQueue(String),

    /// Node count violates the selected queue's range.
    #[error("Node count {nodes} outside range [{min}, {max}] for queue '{queue}'")]
    NodeCountOutOfRange {
        nodes: u32,
        queue: Queue,
        min: u32,
        max: u32,
    },

    /// CPUs-per-node exceeds the per-node core count.
    #[error("CPU count {cpus} exceeds the {limit} cores available per node")]
    CpuLimitExceeded { cpus: u32, limit: u32 },

    /// Memory-per-node exceeds the per-node ceiling.
    #[error("Memory request {memory}gb exceeds the {limit}gb available per node")]
    MemoryLimitExceeded { memory: u32, limit: u32 },

    /// Walltime violates the selected queue's range.
    #[error("Walltime {walltime} min outside range [{min}, {max}] min for queue '{queue}'")]
    WalltimeOutOfRange {
        walltime: u32,
        queue: Queue,
        min: u32,
        max: u32,
    },

    /// Submission client could not be invoked at all.
    #[error("{command} invocation failed: {message}")]
    CommandError { command: String, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
