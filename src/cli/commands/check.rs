//! Check command implementation.
//!
//! `vmf-spawner-setup check` runs only the runtime-presence check.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::SetupSettings;
use crate::error::{Result, SetupError};
use crate::process::ProcessRunner;
use crate::runtime::{RuntimeChecker, RuntimeStatus, RuntimeVersion, VersionCompliance};
use crate::setup::SetupProcedure;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// JSON report printed by `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    #[serde(flatten)]
    pub runtime: RuntimeStatus,
    pub minimum: RuntimeVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<VersionCompliance>,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    settings: SetupSettings,
    args: CheckArgs,
    runner: &'a dyn ProcessRunner,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(settings: SetupSettings, args: CheckArgs, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            settings,
            args,
            runner,
        }
    }

    /// Build the machine-readable report without touching the UI.
    pub fn report(&self) -> CheckReport {
        let checker = RuntimeChecker::new(
            self.runner,
            &self.settings.python,
            self.settings.minimum_python,
        )
        .in_dir(&self.settings.project_root);
        let runtime = checker.check();
        let compliance = runtime
            .is_available()
            .then(|| checker.compliance(&runtime));
        CheckReport {
            runtime,
            minimum: self.settings.minimum_python,
            compliance,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let available = if self.args.json {
            let report = self.report();
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| SetupError::Other(e.into()))?;
            println!("{}", json);
            report.runtime.is_available()
        } else {
            SetupProcedure::new(self.runner, &self.settings)
                .check_runtime(ui)
                .is_available()
        };

        if available {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{CommandOptions, CommandResult as ProcessResult};
    use crate::ui::MockUI;
    use std::path::Path;
    use std::time::Duration;

    struct FixedPython(Option<&'static str>);

    impl ProcessRunner for FixedPython {
        fn run(
            &self,
            program: &str,
            _args: &[String],
            _options: &CommandOptions,
        ) -> Result<ProcessResult> {
            match self.0 {
                Some(line) => Ok(ProcessResult::success(
                    format!("{}\n", line),
                    String::new(),
                    Duration::ZERO,
                )),
                None => Err(SetupError::CommandFailed {
                    command: program.to_string(),
                    code: None,
                }),
            }
        }
    }

    fn settings() -> SetupSettings {
        SetupSettings::defaults(Path::new("/project"))
    }

    #[test]
    fn check_succeeds_when_python_present() {
        let runner = FixedPython(Some("Python 3.11.4"));
        let cmd = CheckCommand::new(settings(), CheckArgs::default(), &runner);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.headers().is_empty());
        assert!(!ui.has_message("Installing"));
    }

    #[test]
    fn check_fails_when_python_missing() {
        let runner = FixedPython(None);
        let cmd = CheckCommand::new(settings(), CheckArgs::default(), &runner);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_spinner_error("not installed"));
    }

    #[test]
    fn report_includes_compliance_for_available_runtime() {
        let runner = FixedPython(Some("Python 3.7.3"));
        let cmd = CheckCommand::new(settings(), CheckArgs { json: true }, &runner);

        let json = serde_json::to_value(cmd.report()).unwrap();

        assert_eq!(json["status"], "available");
        assert_eq!(json["version"], "3.7.3");
        assert_eq!(json["minimum"], "3.8");
        assert_eq!(json["compliance"], "too_old");
    }

    #[test]
    fn report_omits_compliance_when_missing() {
        let runner = FixedPython(None);
        let cmd = CheckCommand::new(settings(), CheckArgs { json: true }, &runner);

        let json = serde_json::to_value(cmd.report()).unwrap();

        assert_eq!(json["status"], "missing");
        assert!(json.get("compliance").is_none());
    }
}
