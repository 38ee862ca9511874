//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, SetupSettings};
use crate::error::{Result, SetupError};
use crate::process::SystemRunner;
use crate::ui::{UserInterface, PAUSE_PROMPT};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from an exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Report an error that ended the run before a command could finish.
///
/// Waits for a key press when interactive so a double-clicked installer
/// keeps its console open long enough to read the message.
pub fn report_error(ui: &mut dyn UserInterface, err: &SetupError) -> CommandResult {
    ui.error(&format!("Error: {}", err));
    if ui.is_interactive() {
        ui.pause(PAUSE_PROMPT);
    }
    CommandResult::failure(1)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    ///
    /// The working directory defaults to the project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            working_dir: project_root.clone(),
            project_root,
        }
    }

    /// Set the directory the installer was started from.
    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.working_dir = working_dir;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load config and resolve settings for this invocation.
    pub fn settings(&self, cli: &Cli) -> Result<SetupSettings> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        let mut overrides = cli.overrides();
        overrides.invocation_dir = Some(self.working_dir.clone());
        SetupSettings::resolve(&self.project_root, &config, &overrides)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand runs `install` with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let settings = self.settings(cli)?;
                let cmd = super::check::CheckCommand::new(settings, args.clone(), &SystemRunner);
                cmd.execute(ui)
            }
            Some(Commands::Install(_)) | None => {
                let settings = self.settings(cli)?;
                let cmd = super::install::InstallCommand::new(settings, &SystemRunner);
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_exit_code() {
        assert!(CommandResult::from_exit_code(0).success);
        assert_eq!(CommandResult::from_exit_code(1).exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn settings_read_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vmf-setup.yml"), "entry_point: app.py\n").unwrap();
        let cli = Cli::try_parse_from(["vmf-spawner-setup", "--python", "py"]).unwrap();

        let settings = CommandDispatcher::new(temp.path().to_path_buf())
            .settings(&cli)
            .unwrap();

        assert_eq!(settings.entry_point, "app.py");
        assert_eq!(settings.python, "py");
        assert_eq!(settings.project_root, temp.path());
    }

    #[test]
    fn settings_anchor_relative_python_to_working_dir() {
        let project = TempDir::new().unwrap();
        let caller = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["vmf-spawner-setup", "--python", "./py"]).unwrap();

        let settings = CommandDispatcher::new(project.path().to_path_buf())
            .with_working_dir(caller.path().to_path_buf())
            .settings(&cli)
            .unwrap();

        assert_eq!(PathBuf::from(&settings.python), caller.path().join("./py"));
    }

    #[test]
    fn report_error_pauses_when_interactive() {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        let err = SetupError::ConfigValidationError {
            message: "minimum_python: bad".to_string(),
        };

        let result = report_error(&mut ui, &err);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Error: Invalid configuration"));
        assert_eq!(ui.pauses(), [PAUSE_PROMPT]);
    }

    #[test]
    fn report_error_skips_pause_when_not_interactive() {
        let mut ui = MockUI::new();
        let err = SetupError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cwd removed",
        ));

        let result = report_error(&mut ui, &err);

        assert!(!result.success);
        assert!(ui.has_error("cwd removed"));
        assert!(ui.pauses().is_empty());
    }

    #[test]
    fn settings_surface_bad_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vmf-setup.yml"), "unknown_key: 1\n").unwrap();
        let cli = Cli::try_parse_from(["vmf-spawner-setup"]).unwrap();

        let result = CommandDispatcher::new(temp.path().to_path_buf()).settings(&cli);
        assert!(matches!(result, Err(SetupError::ConfigParseError { .. })));
    }
}
