//! PBS batch script rendering.
//!
//! Pure text assembly: the same [`JobConfig`] always renders to the same
//! bytes, and nothing here touches the filesystem.

use crate::config::JobConfig;

/// Generate the PBS batch script for a job.
///
/// The script requests resources for the configured queue, loads the
/// Apptainer module, and runs the pipeline entry point inside the
/// container with the workspace (and optional trace directory) bind
/// mounted.
pub fn generate_pbs_script(config: &JobConfig) -> String {
    let mut script = String::new();

    // Shebang (login shell so the module command is available)
    script.push_str("#!/bin/bash -l\n\n");

    // PBS directives
    script.push_str(&format!("#PBS -A {}\n", config.job_name));
    script.push_str(&format!("#PBS -q {}\n", config.queue));
    script.push_str(&format!(
        "#PBS -l select={}:system=polaris:ncpus={}:mem={}gb\n",
        config.nodes, config.cpus_per_node, config.memory_per_node
    ));
    script.push_str("#PBS -l filesystems=home:eagle\n");
    script.push_str("#PBS -l place=scatter\n");
    script.push_str("#PBS -k doe\n");
    script.push_str("#PBS -j oe\n");
    script.push_str(&format!("#PBS -o {}\n", config.log_dir.display()));
    script.push_str(&format!(
        "#PBS -l walltime={}\n",
        format_walltime(config.walltime)
    ));

    // Environment setup
    script.push_str("\nmodule use /soft/spack/gcc/0.6.1/install/modulefiles/Core\n");
    script.push_str("module load apptainer\n\n");

    // Container invocation with bind mounts
    script.push_str(&format!(
        "apptainer -s exec --bind {}:/workspace",
        config.workspace_dir.display()
    ));
    if let Some(trace_dir) = &config.trace_dir {
        script.push_str(&format!(" --bind {}:/traces", trace_dir.display()));
    }
    script.push_str(&format!(
        " {} python {}\n",
        config.container_image.display(),
        config.start_script.display()
    ));

    script
}

/// Format whole minutes as a PBS `HH:MM:SS` walltime string.
///
/// Hours are never folded into days; the preemptable queue accepts
/// requests up to 72 hours and PBS takes those as `72:00:00`.
pub fn format_walltime(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    format!("{:02}:{:02}:00", hours, mins)
}
