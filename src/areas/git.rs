//! Bridge to the `git` executable
//!
//! Every repository operation is a blocking `git` subprocess run with the working
//! directory set to the repository root. Both output streams are captured by the
//! child invocation and never reach the caller's stdout/stderr; stderr is kept only
//! to describe a failure.

use crate::errors::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::{debug, trace};

pub const DEFAULT_GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone)]
pub struct Git {
    program: OsString,
    work_dir: Box<Path>,
}

impl Git {
    pub fn new(program: impl Into<OsString>, work_dir: Box<Path>) -> Self {
        Git {
            program: program.into(),
            work_dir,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run git and return its raw output, whatever the exit status.
    pub fn output<I, S>(&self, args: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.output_with_env(args, &[])
    }

    pub fn output_with_env<I, S>(&self, args: I, envs: &[(&str, &str)]) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect::<Vec<_>>();

        debug!(
            cwd = %self.work_dir.display(),
            args = ?args,
            "running {}",
            self.program.to_string_lossy()
        );

        let output = Command::new(&self.program)
            // keep paths unescaped and messages stable for failure classification
            .args(["-c", "core.quotepath=off"])
            .args(&args)
            .current_dir(&self.work_dir)
            .env("LC_ALL", "C")
            .envs(envs.iter().copied())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        trace!(
            status = %output.status,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "git exited"
        );

        Ok(output)
    }

    /// Run git and fail with `Error::Subprocess` unless it exits successfully.
    ///
    /// # Returns
    ///
    /// The captured stdout bytes
    pub fn run<I, S>(&self, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env<I, S>(&self, args: I, envs: &[(&str, &str)]) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect::<Vec<_>>();
        let output = self.output_with_env(&args, envs)?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(Error::Subprocess {
                command: args
                    .first()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
