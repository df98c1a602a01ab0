//! Batch script writing and qsub submission.

use std::fs;

use crate::config::JobConfig;
use crate::error::{SchedError, SchedResult};
use crate::exec::{CommandExecutor, CommandOutput};
use crate::templates;

/// The PBS submission client.
const QSUB: &str = "qsub";

/// Captured outcome of one submission attempt.
///
/// A non-zero `exit_code` is a scheduler-side rejection, not a failure
/// of this tool; callers report it rather than treating it as an error.
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// Submission client exit code (-1 when killed by a signal).
    pub exit_code: i32,
    /// Captured standard output (the job id line on success).
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl SubmissionResult {
    /// Whether the submission client exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<CommandOutput> for SubmissionResult {
    fn from(output: CommandOutput) -> Self {
        Self {
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Writes batch scripts and hands them to the submission client.
pub struct PbsSubmitter<E> {
    executor: E,
}

impl<E: CommandExecutor> PbsSubmitter<E> {
    /// Create a submitter that invokes the client through `executor`.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Render the job's batch script and write it to the configured path.
    ///
    /// The script's parent directory and the log directory are created
    /// first if needed. Returns `true` when an existing script file was
    /// overwritten.
    pub fn create(&self, config: &JobConfig) -> SchedResult<bool> {
        if let Some(parent) = config.script_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::create_dir_all(&config.log_dir)?;
        tracing::debug!("Ensured log directory {}", config.log_dir.display());

        let overwrote = config.script_path.exists();
        if overwrote {
            tracing::warn!(
                "Overwriting existing script {}",
                config.script_path.display()
            );
        }

        let script = templates::generate_pbs_script(config);
        fs::write(&config.script_path, script)?;

        tracing::debug!("Wrote batch script {}", config.script_path.display());

        Ok(overwrote)
    }

    /// Submit the job's batch script via `qsub`.
    ///
    /// The script is rendered first when it does not exist yet; an
    /// existing script is submitted as-is, without re-rendering.
    pub fn submit(&self, config: &JobConfig) -> SchedResult<SubmissionResult> {
        if !config.script_path.exists() {
            self.create(config)?;
        }

        let output = self
            .executor
            .run(QSUB, &[config.script_path.as_os_str()])
            .map_err(|e| SchedError::CommandError {
                command: QSUB.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("{} exited with status {}", QSUB, output.exit_code);

        Ok(output.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::{OsStr, OsString};
    use std::io;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Executor that records invocations and replays a scripted result.
    struct FakeExecutor {
        calls: RefCell<Vec<(String, Vec<OsString>)>>,
        output: CommandOutput,
    }

    impl FakeExecutor {
        fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                output: CommandOutput {
                    exit_code,
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                },
            }
        }

        fn calls(&self) -> Vec<(String, Vec<OsString>)> {
            self.calls.borrow().clone()
        }
    }

    impl CommandExecutor for FakeExecutor {
        fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput> {
            self.calls.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_os_string()).collect(),
            ));
            Ok(self.output.clone())
        }
    }

    /// Executor whose spawn always fails, as if qsub were not installed.
    struct BrokenExecutor;

    impl CommandExecutor for BrokenExecutor {
        fn run(&self, _program: &str, _args: &[&OsStr]) -> io::Result<CommandOutput> {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ))
        }
    }

    // Create and submit never validate, so input paths do not need to
    // exist here.
    fn test_config(dir: &Path) -> JobConfig {
        JobConfig {
            script_path: dir.join("scripts").join("run_0042.pbs"),
            start_script: PathBuf::from("/home/attpc/analysis/start_run.py"),
            workspace_dir: PathBuf::from("/eagle/attpc/run_0042"),
            trace_dir: None,
            container_image: PathBuf::from("/home/attpc/containers/analysis.sif"),
            log_dir: dir.join("logs"),
            job_name: "attpc_e20009".to_string(),
            queue: "debug".to_string(),
            nodes: 1,
            cpus_per_node: 8,
            memory_per_node: 16,
            walltime: 30,
        }
    }

    #[test]
    fn test_create_writes_script() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let submitter = PbsSubmitter::new(FakeExecutor::new(0, "", ""));

        let overwrote = submitter.create(&config).unwrap();
        assert!(!overwrote);

        let script = fs::read_to_string(&config.script_path).unwrap();
        assert!(script.contains("#PBS -q debug\n"));
    }

    #[test]
    fn test_create_makes_directories() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let submitter = PbsSubmitter::new(FakeExecutor::new(0, "", ""));

        submitter.create(&config).unwrap();
        assert!(dir.path().join("scripts").is_dir());
        assert!(config.log_dir.is_dir());
    }

    #[test]
    fn test_create_reports_overwrite() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let submitter = PbsSubmitter::new(FakeExecutor::new(0, "", ""));

        assert!(!submitter.create(&config).unwrap());
        assert!(submitter.create(&config).unwrap());
    }

    #[test]
    fn test_submit_renders_missing_script() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let executor = FakeExecutor::new(0, "12345.polaris-pbs-01\n", "");
        let submitter = PbsSubmitter::new(&executor);

        let result = submitter.submit(&config).unwrap();
        assert!(result.success());
        assert_eq!(result.stdout, "12345.polaris-pbs-01\n");
        assert!(config.script_path.is_file());

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "qsub");
        assert_eq!(calls[0].1, vec![config.script_path.clone().into_os_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_submit_passes_script_path_bytes_unmodified() {
        use std::os::unix::ffi::OsStringExt;

        let dir = TempDir::new().unwrap();
        let mut config = test_config(dir.path());
        // A script path that is valid on disk but not valid UTF-8.
        let mut raw = dir.path().as_os_str().to_os_string().into_vec();
        raw.extend_from_slice(b"/run_\xff\xfe.pbs");
        config.script_path = PathBuf::from(OsString::from_vec(raw));

        let executor = FakeExecutor::new(0, "", "");
        let submitter = PbsSubmitter::new(&executor);
        submitter.submit(&config).unwrap();

        assert!(config.script_path.is_file());
        let calls = executor.calls();
        assert_eq!(calls[0].1, vec![config.script_path.clone().into_os_string()]);
    }

    #[test]
    fn test_submit_keeps_existing_script() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(config.script_path.parent().unwrap()).unwrap();
        fs::write(&config.script_path, "#hand-edited\n").unwrap();

        let executor = FakeExecutor::new(0, "12346.polaris-pbs-01\n", "");
        let submitter = PbsSubmitter::new(&executor);
        submitter.submit(&config).unwrap();

        // Hand-edited script goes through untouched.
        let script = fs::read_to_string(&config.script_path).unwrap();
        assert_eq!(script, "#hand-edited\n");
        assert_eq!(executor.calls().len(), 1);
    }

    #[test]
    fn test_submit_surfaces_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let submitter = PbsSubmitter::new(FakeExecutor::new(
            171,
            "",
            "qsub: Job violates queue policy\n",
        ));

        let result = submitter.submit(&config).unwrap();
        assert!(!result.success());
        assert_eq!(result.exit_code, 171);
        assert_eq!(result.stderr, "qsub: Job violates queue policy\n");
    }

    #[test]
    fn test_submit_maps_spawn_failure() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let submitter = PbsSubmitter::new(BrokenExecutor);

        let err = submitter.submit(&config).unwrap_err();
        assert!(matches!(err, SchedError::CommandError { command, .. } if command == "qsub"));
    }
}
