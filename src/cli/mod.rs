//! Command-line interface for the installer.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InstallArgs};
pub use commands::{report_error, Command, CommandDispatcher, CommandResult};
