//! Install command implementation.
//!
//! `vmf-spawner-setup install` (or no subcommand) runs the full
//! installation procedure.

use crate::config::SetupSettings;
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::setup::SetupProcedure;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    settings: SetupSettings,
    runner: &'a dyn ProcessRunner,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(settings: SetupSettings, runner: &'a dyn ProcessRunner) -> Self {
        Self { settings, runner }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &SetupSettings {
        &self.settings
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Running setup with {:?}", self.settings);

        let outcome = SetupProcedure::new(self.runner, &self.settings).run(ui);
        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::process::{CommandOptions, CommandResult as ProcessResult};
    use crate::ui::MockUI;
    use std::path::Path;
    use std::time::Duration;

    struct NoPython;

    impl ProcessRunner for NoPython {
        fn run(
            &self,
            program: &str,
            _args: &[String],
            _options: &CommandOptions,
        ) -> Result<ProcessResult> {
            Err(SetupError::CommandFailed {
                command: program.to_string(),
                code: None,
            })
        }
    }

    struct FailingPip;

    impl ProcessRunner for FailingPip {
        fn run(
            &self,
            _program: &str,
            args: &[String],
            _options: &CommandOptions,
        ) -> Result<ProcessResult> {
            if args.iter().any(|a| a == "--version") {
                Ok(ProcessResult::success(
                    "Python 3.12.1\n".to_string(),
                    String::new(),
                    Duration::ZERO,
                ))
            } else {
                Ok(ProcessResult::failure(
                    Some(1),
                    String::new(),
                    "ERROR: Could not open requirements file".to_string(),
                    Duration::ZERO,
                ))
            }
        }
    }

    #[test]
    fn missing_python_exits_one() {
        let settings = SetupSettings::defaults(Path::new("/project"));
        let cmd = InstallCommand::new(settings, &NoPython);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn failing_pip_still_exits_zero() {
        let settings = SetupSettings::defaults(Path::new("/project"));
        let cmd = InstallCommand::new(settings, &FailingPip);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Installation completed!"));
    }

    #[test]
    fn failing_pip_with_strict_exits_one() {
        let mut settings = SetupSettings::defaults(Path::new("/project"));
        settings.strict = true;
        let cmd = InstallCommand::new(settings, &FailingPip);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(cmd.settings().python, crate::process::default_python_program());
    }
}
