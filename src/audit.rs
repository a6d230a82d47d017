//! Delegated dependency audit (`npm audit` by default).
//!
//! The command is executed directly from an argument vector; no shell is
//! involved, so the project path is never interpreted.

use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

use crate::error::{Error, Result};

/// Result of one audit invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Exit status 0; captured standard output.
    Passed { stdout: String },
    /// Non-zero exit; status description and captured standard error.
    Failed { status: String, stderr: String },
}

impl AuditOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuditOutcome::Passed { .. })
    }
}

/// Runs an audit for a project directory.
pub trait Auditor {
    /// Human-readable command line, used in messages.
    fn describe(&self) -> String;

    /// Runs the audit once with `project_dir` as working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuditSpawn`] if the process could not be started.
    /// A non-zero exit is not an error; it yields [`AuditOutcome::Failed`].
    fn run(&self, project_dir: &Path) -> Result<AuditOutcome>;
}

/// [`Auditor`] backed by an external process.
#[derive(Debug, Clone)]
pub struct CommandAuditor {
    program: String,
    args: Vec<String>,
}

impl CommandAuditor {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds from a `[program, args...]` vector as stored in the config file.
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }
}

impl fmt::Display for CommandAuditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl Auditor for CommandAuditor {
    fn describe(&self) -> String {
        self.to_string()
    }

    fn run(&self, project_dir: &Path) -> Result<AuditOutcome> {
        debug!(command = %self, dir = %project_dir.display(), "running audit");

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .output()
            .map_err(|source| Error::AuditSpawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(AuditOutcome::Passed {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            })
        } else {
            Ok(AuditOutcome::Failed {
                status: describe_status(output.status),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
