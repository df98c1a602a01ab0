//! Create command implementation.
//!
//! Validates a job description and writes its PBS batch script without
//! submitting anything.

use std::path::Path;

use anyhow::Result;
use console::style;

use alsvid_sched::{PbsSubmitter, SystemExecutor};

use super::common::load_validated;

/// Execute the create command.
pub fn execute(config_path: &Path) -> Result<()> {
    let config = load_validated(config_path)?;

    let submitter = PbsSubmitter::new(SystemExecutor);
    let overwrote = submitter.create(&config)?;

    if overwrote {
        println!(
            "{} Existing script {} was overwritten",
            style("warning:").yellow().bold(),
            config.script_path.display()
        );
    }

    println!(
        "{} Created batch script {}",
        style("✓").green().bold(),
        style(config.script_path.display()).cyan()
    );
    println!(
        "  Submit with: {}",
        style(format!("alsvid submit {}", config_path.display())).dim()
    );

    Ok(())
}
