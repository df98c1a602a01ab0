//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::Result;
use console::style;

use alsvid_sched::{JobConfig, validate};

/// Load a job description and validate it against Polaris queue policy.
///
/// Prints a one-line summary of the accepted job.
pub fn load_validated(path: &Path) -> Result<JobConfig> {
    let config = JobConfig::from_file(path)?;
    tracing::debug!("Loaded job configuration from {}", path.display());

    let queue = validate(&config)?;

    println!(
        "{} Validated job {} for queue {} ({} node{}, {} min)",
        style("→").cyan().bold(),
        style(&config.job_name).green(),
        style(queue).yellow(),
        config.nodes,
        if config.nodes == 1 { "" } else { "s" },
        config.walltime
    );

    Ok(config)
}
