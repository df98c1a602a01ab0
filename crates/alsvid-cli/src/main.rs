//! Alsvid Command-Line Interface
//!
//! ```text
//!              A L S V I D
//!     Batch jobs for ALCF Polaris,
//!        saddled and sent off
//! ```
//!
//! Validates AT-TPC analysis job descriptions against Polaris queue
//! policy, renders their PBS batch scripts, and submits them via `qsub`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{create, submit};

/// Worked config example, shown at the end of `--help`.
const CONFIG_HELP: &str = r#"CONFIG is the path to a JSON job description:
    {
        "script_path": "/home/me/jobs/run_0042.pbs",
        "start_script": "/home/me/analysis/start_run.py",
        "workspace_dir": "/eagle/myproject/run_0042",
        "trace_dir": "/eagle/myproject/traces",
        "container_image": "/home/me/containers/analysis.sif",
        "log_dir": "/home/me/logs",
        "job_name": "myproject",
        "queue": "debug",
        "nodes": 1,
        "cpus_per_node": 8,
        "memory_per_node": 16,
        "walltime": 30
    }

"trace_dir" is optional; every other field is required. "walltime" is in
minutes, "memory_per_node" in GB. Valid queues are debug, debug-scaling,
prod, preemptable, and demand."#;

/// Alsvid - prepare and submit Polaris batch jobs for AT-TPC analysis
#[derive(Parser)]
#[command(name = "alsvid")]
#[command(author, version, about, after_long_help = CONFIG_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a job description and write its PBS batch script
    Create {
        /// Path to the job configuration (JSON)
        config: PathBuf,
    },

    /// Submit a job to PBS (the batch script is written first if absent)
    Submit {
        /// Path to the job configuration (JSON)
        config: PathBuf,
    },
}

fn main() {
    // Setup logging (RUST_LOG controls verbosity, silent by default)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Execute command
    let result = match cli.command {
        Commands::Create { config } => create::execute(&config),
        Commands::Submit { config } => submit::execute(&config),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
