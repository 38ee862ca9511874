//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! config once and routes `install`, `check` and `completions` to their
//! implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;

pub use check::{CheckCommand, CheckReport};
pub use completions::CompletionsCommand;
pub use dispatcher::{report_error, Command, CommandDispatcher, CommandResult};
pub use install::InstallCommand;
