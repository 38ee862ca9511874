//! The installation procedure.
//!
//! Three steps run in order: the runtime-presence check, dependency
//! installation, and the completion notice. Only a missing runtime stops
//! the procedure early. The installer's own success is not consulted
//! unless `strict` is set.

use crate::config::SetupSettings;
use crate::process::ProcessRunner;
use crate::runtime::{RuntimeChecker, RuntimeStatus, VersionCompliance};
use crate::ui::{UserInterface, PAUSE_PROMPT};

use super::installer::{DependencyInstaller, InstallReport};

/// Display name of the required runtime.
pub const RUNTIME_NAME: &str = "Python";

/// How a setup run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupOutcome {
    /// The interpreter could not be run; nothing was installed.
    RuntimeMissing { runtime: RuntimeStatus },

    /// The installer failed and `strict` was set.
    InstallFailed {
        runtime: RuntimeStatus,
        install: InstallReport,
    },

    /// The completion notice was reached.
    Completed {
        runtime: RuntimeStatus,
        install: InstallReport,
    },
}

impl SetupOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupOutcome::Completed { .. } => 0,
            SetupOutcome::RuntimeMissing { .. } | SetupOutcome::InstallFailed { .. } => 1,
        }
    }
}

/// Runs the installation procedure against a [`ProcessRunner`].
pub struct SetupProcedure<'a> {
    runner: &'a dyn ProcessRunner,
    settings: &'a SetupSettings,
}

impl<'a> SetupProcedure<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, settings: &'a SetupSettings) -> Self {
        Self { runner, settings }
    }

    /// Run every step and report how the run ended.
    pub fn run(&self, ui: &mut dyn UserInterface) -> SetupOutcome {
        ui.show_header(&format!("{} - Setup", self.settings.app_name));

        let runtime = self.check_runtime(ui);
        if !runtime.is_available() {
            self.pause(ui);
            return SetupOutcome::RuntimeMissing { runtime };
        }

        ui.message(&format!(
            "Installing dependencies from {}...",
            self.settings.requirements.display()
        ));
        let stream = ui.output_mode().shows_command_output();
        let install = DependencyInstaller::new(self.runner).install(self.settings, stream);

        if self.settings.strict && !install.success {
            ui.error(&format!(
                "Dependency installation failed (exit code {}): {}",
                install
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "none".to_string()),
                install.command
            ));
            self.pause(ui);
            return SetupOutcome::InstallFailed { runtime, install };
        }

        ui.message("");
        ui.success("Installation completed!");
        ui.show_hint(&format!(
            "Run the application with: {}",
            self.settings.launch_command()
        ));
        self.pause(ui);

        SetupOutcome::Completed { runtime, install }
    }

    /// Step 1: query the interpreter and report the result.
    ///
    /// Shows the version line on success, or the missing-runtime error and
    /// install hint on failure. A version below the minimum only warns.
    pub fn check_runtime(&self, ui: &mut dyn UserInterface) -> RuntimeStatus {
        let checker = RuntimeChecker::new(
            self.runner,
            &self.settings.python,
            self.settings.minimum_python,
        )
        .in_dir(&self.settings.project_root);

        let mut spinner = ui.start_spinner(&format!("Checking {} installation...", RUNTIME_NAME));
        let status = checker.check();

        match &status {
            RuntimeStatus::Available {
                program,
                path,
                version_line,
                ..
            } => {
                let shown = if version_line.is_empty() {
                    format!("{} found", program)
                } else {
                    version_line.clone()
                };
                spinner.finish_success(&shown);

                if ui.output_mode().shows_details() {
                    if let Some(path) = path {
                        ui.message(&format!("Using {}", path.display()));
                    }
                }

                if checker.compliance(&status) == VersionCompliance::TooOld {
                    if let Some(version) = status.version() {
                        ui.warning(&format!(
                            "{} {} found; {} recommends {} {} or newer.",
                            RUNTIME_NAME,
                            version,
                            self.settings.app_name,
                            RUNTIME_NAME,
                            checker.minimum()
                        ));
                    }
                }
            }
            RuntimeStatus::Missing { .. } => {
                spinner.finish_error(&format!(
                    "{} is not installed or not found in PATH!",
                    RUNTIME_NAME
                ));
                ui.show_hint(&format!(
                    "Please install {} {} or newer and make sure it is on PATH.",
                    RUNTIME_NAME,
                    checker.minimum()
                ));
            }
        }

        status
    }

    fn pause(&self, ui: &mut dyn UserInterface) {
        if self.settings.pause && ui.is_interactive() {
            ui.pause(PAUSE_PROMPT);
        }
    }
}
