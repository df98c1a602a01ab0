//! External command execution.
//!
//! The submission client runs behind the [`CommandExecutor`] trait so the
//! submit path can be exercised against a fake client in tests.

use std::ffi::OsStr;
use std::io;
use std::process::Command;

/// Captured outcome of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Process exit code (-1 when the process was killed by a signal).
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external program, blocking until it exits and capturing its
/// exit code and both output streams.
///
/// Arguments are [`OsStr`] so paths pass through unmangled regardless
/// of encoding. An `Err` means the program could not be started at
/// all; a program that runs and fails comes back as `Ok` with a
/// non-zero exit code.
pub trait CommandExecutor {
    /// Run `program` with `args` and wait for it to finish.
    fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// Executor backed by real system processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
