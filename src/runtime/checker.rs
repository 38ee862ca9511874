//! Runtime-presence check.
//!
//! The `RuntimeChecker` invokes the interpreter with `--version` and turns
//! the outcome into a [`RuntimeStatus`]. Presence is decided solely by the
//! invocation: a program that cannot be spawned, or that exits non-zero,
//! is missing.

use crate::process::{CommandOptions, ProcessRunner};
use std::path::PathBuf;

use super::probe::{parse_system_path, resolve_program};
use super::status::{RuntimeStatus, VersionCompliance};
use super::version::RuntimeVersion;

/// Option passed to the interpreter to query its version.
pub const VERSION_FLAG: &str = "--version";

/// Checks whether the interpreter is installed and reachable.
pub struct RuntimeChecker<'a> {
    runner: &'a dyn ProcessRunner,
    program: String,
    minimum: RuntimeVersion,
    path_entries: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl<'a> RuntimeChecker<'a> {
    /// Create a checker that resolves against the system PATH.
    pub fn new(runner: &'a dyn ProcessRunner, program: &str, minimum: RuntimeVersion) -> Self {
        Self::with_path(runner, program, minimum, parse_system_path())
    }

    /// Create a checker with explicit PATH entries for location lookup.
    pub fn with_path(
        runner: &'a dyn ProcessRunner,
        program: &str,
        minimum: RuntimeVersion,
        path_entries: Vec<PathBuf>,
    ) -> Self {
        Self {
            runner,
            program: program.to_string(),
            minimum,
            path_entries,
            working_dir: None,
        }
    }

    /// Run the version query from `dir`, the directory the installer uses.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The minimum supported version.
    pub fn minimum(&self) -> RuntimeVersion {
        self.minimum
    }

    /// Run the version query.
    pub fn check(&self) -> RuntimeStatus {
        let args = vec![VERSION_FLAG.to_string()];
        let mut options = CommandOptions::captured();
        if let Some(dir) = &self.working_dir {
            options = options.in_dir(dir);
        }
        let result = match self.runner.run(&self.program, &args, &options) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Runtime check could not start '{}': {}", self.program, e);
                return RuntimeStatus::Missing {
                    program: self.program.clone(),
                    exit_code: None,
                };
            }
        };

        if !result.success {
            tracing::debug!(
                "Runtime check '{} {}' exited with {:?}",
                self.program,
                VERSION_FLAG,
                result.exit_code
            );
            return RuntimeStatus::Missing {
                program: self.program.clone(),
                exit_code: result.exit_code,
            };
        }

        let version_line = first_line(&result.stdout)
            .or_else(|| first_line(&result.stderr))
            .unwrap_or_default();
        let version = RuntimeVersion::extract(&version_line);
        let path = resolve_program(&self.program, &self.path_entries);

        tracing::debug!(
            "Found '{}' at {:?}: {:?}",
            self.program,
            path,
            version_line
        );

        RuntimeStatus::Available {
            program: self.program.clone(),
            path,
            version_line,
            version,
        }
    }

    /// Compare an available interpreter's version against the minimum.
    pub fn compliance(&self, status: &RuntimeStatus) -> VersionCompliance {
        match status.version() {
            Some(version) if version.meets(&self.minimum) => VersionCompliance::Supported,
            Some(_) => VersionCompliance::TooOld,
            None => VersionCompliance::Unknown,
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
