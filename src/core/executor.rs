//! Command execution for running external tools.
//!
//! This module provides a small synchronous executor that invokes a
//! program with arguments, captures both output streams, and reports the
//! exit status. Every invocation blocks until the child exits; a hook run
//! has no use for timeouts or retries.

use crate::core::error::{Error, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Output from a single subprocess invocation.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit status of the command.
    pub status: i32,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error.
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    /// Returns true if the command exited with status 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.status == 0
    }

    /// Returns standard output decoded as UTF-8, lossily.
    #[must_use]
    pub fn stdout_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    /// Returns standard error decoded as UTF-8, lossily.
    #[must_use]
    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}

/// Executor for running external programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor;

impl Executor {
    /// Creates a new executor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes a program in the current working directory.
    ///
    /// The first element of `argv` is the program, the rest its arguments.
    /// A spawn failure is fatal for the whole run and surfaces as
    /// [`Error::Launch`].
    pub fn execute<S: AsRef<OsStr>>(&self, argv: &[S]) -> Result<ExecutionResult> {
        self.run(argv, None)
    }

    /// Executes a program with a pinned working directory.
    pub fn execute_in<S: AsRef<OsStr>>(&self, dir: &Path, argv: &[S]) -> Result<ExecutionResult> {
        self.run(argv, Some(dir))
    }

    fn run<S: AsRef<OsStr>>(&self, argv: &[S], dir: Option<&Path>) -> Result<ExecutionResult> {
        let (program, args) = argv.split_first().ok_or_else(|| Error::Internal {
            message: "empty command line".to_string(),
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(
            program = %program.as_ref().to_string_lossy(),
            "executing command"
        );

        let output = cmd
            .output()
            .map_err(|e| Error::launch(program.as_ref().to_string_lossy(), e))?;

        Ok(ExecutionResult {
            status: output.status.code().unwrap_or(1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    /// Checks if a command exists in PATH.
    #[must_use]
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }
}
