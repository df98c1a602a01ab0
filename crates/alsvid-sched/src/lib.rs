//! # alsvid-sched
//!
//! Job preparation and submission for AT-TPC analysis pipelines on ALCF
//! Polaris.
//!
//! This crate owns everything between a JSON job description and the
//! PBS scheduler: loading and validating the description, rendering the
//! batch script that runs the pipeline inside an Apptainer container,
//! and handing the script to `qsub`.
//!
//! ## Core Components
//!
//! - [`JobConfig`]: one job's description, loaded from JSON
//! - [`Queue`] / [`QueuePolicy`]: Polaris queues and their resource limits
//! - [`validate`]: fail-fast policy and filesystem checks
//! - [`generate_pbs_script`]: pure batch script rendering
//! - [`PbsSubmitter`]: script writing and `qsub` invocation
//! - [`CommandExecutor`]: seam for faking the submission client in tests
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use alsvid_sched::{validate, JobConfig, PbsSubmitter, SystemExecutor};
//!
//! # fn main() -> alsvid_sched::SchedResult<()> {
//! let config = JobConfig::from_file(Path::new("job.json"))?;
//! let queue = validate(&config)?;
//! println!("submitting to {queue}");
//!
//! let submitter = PbsSubmitter::new(SystemExecutor);
//! let result = submitter.submit(&config)?;
//! println!("qsub exited with {}", result.exit_code);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod policy;
pub mod submit;
pub mod templates;
pub mod validate;

pub use config::JobConfig;
pub use error::{SchedError, SchedResult};
pub use exec::{CommandExecutor, CommandOutput, SystemExecutor};
pub use policy::{CPU_LIMIT, MEMORY_LIMIT_GB, Queue, QueuePolicy};
pub use submit::{PbsSubmitter, SubmissionResult};
pub use templates::{format_walltime, generate_pbs_script};
pub use validate::validate;
