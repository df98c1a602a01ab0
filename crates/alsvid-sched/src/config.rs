//! Job configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SchedError, SchedResult};

/// Description of one analysis job, loaded from a JSON file.
///
/// All fields are required except `trace_dir`. Unknown fields in the
/// JSON are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Where the rendered batch script is written.
    pub script_path: PathBuf,

    /// Pipeline entry point, executed with `python` inside the container.
    pub start_script: PathBuf,

    /// Analysis workspace, bind-mounted into the container at `/workspace`.
    pub workspace_dir: PathBuf,

    /// Raw trace directory, bind-mounted at `/traces` when present.
    #[serde(default)]
    pub trace_dir: Option<PathBuf>,

    /// Apptainer image the job runs in.
    pub container_image: PathBuf,

    /// Directory receiving the job's combined output log.
    pub log_dir: PathBuf,

    /// Job name, rendered as the PBS account directive.
    pub job_name: String,

    /// Polaris queue to submit to.
    pub queue: String,

    /// Number of nodes to request.
    pub nodes: u32,

    /// CPUs to request per node.
    pub cpus_per_node: u32,

    /// Memory to request per node, in GB.
    pub memory_per_node: u32,

    /// Wall-clock limit in minutes.
    pub walltime: u32,
}

impl JobConfig {
    /// Load a job configuration from a JSON file.
    pub fn from_file(path: &Path) -> SchedResult<Self> {
        if !path.exists() {
            return Err(SchedError::ConfigNotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| SchedError::ConfigMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
