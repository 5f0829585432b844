//! External command execution
//!
//! Everything hostkit does to the system goes through [`CommandRunner`]:
//! package tools, the user service manager and the desktop notifiers.

mod recording;

pub use recording::RecordingRunner;

use std::fmt;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    /// Shell-quoted command line, as it would be typed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words) {
            Ok(line) => f.write_str(&line),
            // Words with NUL bytes can't be quoted; show them raw
            Err(_) => write!(f, "{} {}", self.program, self.args.join(" ")),
        }
    }
}

/// Runs external commands
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run to completion; a non-zero exit is an error
    async fn run(&self, spec: &CommandSpec) -> Result<(), ExecError>;

    /// Start without waiting for the command to finish
    fn spawn_detached(&self, spec: &CommandSpec) -> Result<(), ExecError>;

    /// Check whether a program can be found on PATH
    fn is_available(&self, program: &str) -> bool;
}

/// Runs commands on the host
///
/// Child stdout/stderr are inherited so diagnostics land in the build or
/// session log of whoever invoked us.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<(), ExecError> {
        log::info!("Running: {}", spec);

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|source| ExecError::Spawn {
                command: spec.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecError::Failed {
                command: spec.to_string(),
                status,
            })
        }
    }

    fn spawn_detached(&self, spec: &CommandSpec) -> Result<(), ExecError> {
        log::info!("Spawning: {}", spec);

        // Dropping the handle leaves the child running; tokio reaps it
        Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| ExecError::Spawn {
                command: spec.to_string(),
                source,
            })
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed: {status}")]
    Failed { command: String, status: ExitStatus },
}
