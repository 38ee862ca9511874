//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;

/// Installer for VMF Spawner: checks for Python and installs its dependencies.
#[derive(Debug, Parser)]
#[command(name = "vmf-spawner-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default vmf-setup.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter to check and install with
    #[arg(long, global = true, env = "VMF_SETUP_PYTHON", value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Dependency manifest to install from
    #[arg(long, global = true, env = "VMF_SETUP_REQUIREMENTS", value_name = "PATH")]
    pub requirements: Option<PathBuf>,

    /// Exit without waiting for a key press
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print errors only
    #[arg(long, global = true, conflicts_with_all = ["verbose", "quiet"])]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Overrides for settings resolution taken from flags and env vars.
    pub fn overrides(&self) -> SettingsOverrides {
        let strict = match &self.command {
            Some(Commands::Install(args)) => args.strict,
            _ => false,
        };
        SettingsOverrides {
            python: self.python.clone(),
            requirements: self.requirements.clone(),
            no_pause: self.no_pause,
            strict,
            invocation_dir: None,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check for Python and install dependencies (default if no command specified)
    Install(InstallArgs),

    /// Only check that Python is installed and reachable
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Fail with exit code 1 if dependency installation fails
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_has_no_subcommand() {
        let cli = Cli::try_parse_from(["vmf-spawner-setup"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_pause);
    }

    #[test]
    fn install_strict_feeds_overrides() {
        let cli = Cli::try_parse_from([
            "vmf-spawner-setup",
            "install",
            "--strict",
            "--python",
            "py",
            "--no-pause",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert!(overrides.strict);
        assert!(overrides.no_pause);
        assert_eq!(overrides.python.as_deref(), Some("py"));
    }

    #[test]
    fn check_accepts_json_flag() {
        let cli = Cli::try_parse_from(["vmf-spawner-setup", "check", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            other => panic!("Expected check, got {:?}", other),
        }
        assert!(!cli_overrides_strict(&["vmf-spawner-setup", "check"]));
    }

    fn cli_overrides_strict(argv: &[&str]) -> bool {
        Cli::try_parse_from(argv).unwrap().overrides().strict
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["vmf-spawner-setup", "-v", "-q"]).is_err());
    }

    #[test]
    fn silent_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["vmf-spawner-setup", "--silent", "-q"]).is_err());
        assert!(Cli::try_parse_from(["vmf-spawner-setup", "--silent"]).unwrap().silent);
    }

    #[test]
    fn requirements_flag_parses_path() {
        let cli = Cli::try_parse_from([
            "vmf-spawner-setup",
            "--requirements",
            "deps/requirements.txt",
        ])
        .unwrap();
        assert_eq!(
            cli.requirements,
            Some(PathBuf::from("deps/requirements.txt"))
        );
    }
}
