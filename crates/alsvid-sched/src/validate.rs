//! Job validation against filesystem state and queue policy.
//!
//! Checks run fail-fast in a fixed order: input paths first, then queue
//! membership, then the resource ranges for that queue. The first
//! failing check wins and later ones are never evaluated.

use crate::config::JobConfig;
use crate::error::{SchedError, SchedResult};
use crate::policy::{CPU_LIMIT, MEMORY_LIMIT_GB, Queue};

/// Validate a job configuration, resolving its queue.
///
/// Returns the [`Queue`] the job targets when every check passes, or
/// the first failing check's error. Output locations (script path, log
/// directory) are not checked here; they are created on demand at
/// write time.
pub fn validate(config: &JobConfig) -> SchedResult<Queue> {
    if !config.start_script.is_file() {
        return Err(SchedError::PathMissing {
            role: "Start script",
            path: config.start_script.clone(),
        });
    }

    if !config.workspace_dir.is_dir() {
        return Err(SchedError::PathMissing {
            role: "Workspace directory",
            path: config.workspace_dir.clone(),
        });
    }

    if !config.container_image.is_file() {
        return Err(SchedError::PathMissing {
            role: "Container image",
            path: config.container_image.clone(),
        });
    }

    let queue: Queue = config.queue.parse()?;
    let policy = queue.policy();

    if config.nodes < policy.min_nodes || config.nodes > policy.max_nodes {
        return Err(SchedError::NodeCountOutOfRange {
            nodes: config.nodes,
            queue,
            min: policy.min_nodes,
            max: policy.max_nodes,
        });
    }

    if config.cpus_per_node > CPU_LIMIT {
        return Err(SchedError::CpuLimitExceeded {
            cpus: config.cpus_per_node,
            limit: CPU_LIMIT,
        });
    }

    if config.memory_per_node > MEMORY_LIMIT_GB {
        return Err(SchedError::MemoryLimitExceeded {
            memory: config.memory_per_node,
            limit: MEMORY_LIMIT_GB,
        });
    }

    if config.walltime < policy.min_walltime || config.walltime > policy.max_walltime {
        return Err(SchedError::WalltimeOutOfRange {
            walltime: config.walltime,
            queue,
            min: policy.min_walltime,
            max: policy.max_walltime,
        });
    }

    Ok(queue)
}
