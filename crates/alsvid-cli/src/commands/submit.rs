//! Submit command implementation.
//!
//! Validates a job description, makes sure its batch script exists, and
//! hands the script to `qsub`. The qsub exit code is reported verbatim;
//! a scheduler-side rejection is not an error exit of this tool.

use std::path::Path;

use anyhow::Result;
use console::style;

use alsvid_sched::{PbsSubmitter, SystemExecutor};

use super::common::load_validated;

/// Execute the submit command.
pub fn execute(config_path: &Path) -> Result<()> {
    let config = load_validated(config_path)?;

    let submitter = PbsSubmitter::new(SystemExecutor);
    let result = submitter.submit(&config)?;

    if result.success() {
        println!(
            "{} Job submitted with status code {}",
            style("✓").green().bold(),
            result.exit_code
        );
    } else {
        println!(
            "{} Submission client exited with status code {}",
            style("✗").red().bold(),
            result.exit_code
        );
    }

    if !result.stdout.is_empty() {
        println!("  stdout: {}", result.stdout.trim_end());
    }
    if !result.stderr.is_empty() {
        println!("  stderr: {}", result.stderr.trim_end());
    }

    Ok(())
}
