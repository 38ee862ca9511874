//! Dependency installation step.
//!
//! Runs the package manager against the manifest. The outcome is reported
//! but never treated as an error here; callers decide what a failed install
//! means.

use crate::config::SetupSettings;
use crate::process::{display_command, CommandOptions, ProcessRunner};
use serde::Serialize;
use std::path::PathBuf;

/// What the installer step observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    /// The full command line that was run.
    pub command: String,
    /// Manifest passed to the package manager.
    pub manifest: PathBuf,
    /// Exit code; `None` if the package manager never started.
    pub exit_code: Option<i32>,
    /// Whether the package manager exited with code 0.
    pub success: bool,
}

/// Installs the manifest's packages with the checked interpreter's pip.
pub struct DependencyInstaller<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> DependencyInstaller<'a> {
    /// Create an installer that spawns through `runner`.
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// Arguments passed to the interpreter.
    pub fn install_args(settings: &SetupSettings) -> Vec<String> {
        vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            "-r".to_string(),
            settings.requirements.to_string_lossy().to_string(),
        ]
    }

    /// Run `<python> -m pip install -r <manifest>` in the project root.
    ///
    /// With `stream_output` the package manager writes straight to the
    /// console; otherwise its output is captured and dropped.
    pub fn install(&self, settings: &SetupSettings, stream_output: bool) -> InstallReport {
        let args = Self::install_args(settings);
        let command = display_command(&settings.python, &args);
        let options = CommandOptions {
            capture_stdout: !stream_output,
            capture_stderr: !stream_output,
            ..Default::default()
        }
        .in_dir(&settings.project_root);

        let (exit_code, success) = match self.runner.run(&settings.python, &args, &options) {
            Ok(result) if result.success => {
                tracing::debug!("'{}' succeeded in {:?}", command, result.duration);
                (result.exit_code, true)
            }
            Ok(result) => {
                tracing::debug!(
                    "'{}' failed with exit code {:?} after {:?}",
                    command,
                    result.exit_code,
                    result.duration
                );
                (result.exit_code, false)
            }
            Err(e) => {
                tracing::debug!("Package manager could not start: {}", e);
                (None, false)
            }
        };

        InstallReport {
            command,
            manifest: settings.requirements.clone(),
            exit_code,
            success,
        }
    }
}
