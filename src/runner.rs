//! Invoking the command that lists the installable applications.
//!
//! # Doc Audit
//! - ignore: internal implementation detail

use std::fmt;
use std::process::Command;

use crate::app::App;
use crate::error::CheckError;
use crate::parse::parse_apps;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a command line from `[program, args...]`.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_parts(parts: &[String]) -> Option<Self> {
        let (program, args) = parts.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs an external command and returns its standard output.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// The captured output is returned unmodified. Any failure to spawn, a
    /// non-zero exit, or output that is not UTF-8 is a
    /// [`CheckError::CommandFailed`].
    fn run(&self, program: &str, args: &[String]) -> Result<String, CheckError>;
}

/// Spawns real subprocesses via `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CheckError> {
        let command = CommandLine::new(program, args.iter().cloned()).to_string();

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CheckError::CommandFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                format!("{}\n{}", output.status, stderr.trim())
            };
            return Err(CheckError::CommandFailed { command, reason });
        }

        String::from_utf8(output.stdout).map_err(|e| CheckError::CommandFailed {
            command,
            reason: format!("output is not valid UTF-8: {}", e),
        })
    }
}

/// Returns canned output instead of spawning anything.
#[derive(Debug, Clone)]
pub struct StaticRunner {
    result: Result<String, String>,
}

impl StaticRunner {
    /// A runner whose command always succeeds with `output`.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            result: Ok(output.into()),
        }
    }

    /// A runner whose command always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
        }
    }
}

impl CommandRunner for StaticRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CheckError> {
        self.result
            .clone()
            .map_err(|reason| CheckError::CommandFailed {
                command: CommandLine::new(program, args.iter().cloned()).to_string(),
                reason,
            })
    }
}

/// Runs `command` and returns its raw output.
pub fn query_installable_apps<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandLine,
) -> Result<String, CheckError> {
    runner.run(&command.program, &command.args)
}

/// Runs `command` and parses its output into apps.
pub fn load_installable_apps<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandLine,
) -> Result<Vec<App>, CheckError> {
    parse_apps(&query_installable_apps(runner, command)?)
}
