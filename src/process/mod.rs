//! Subprocess execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, CommandOptions, CommandResult, ProcessRunner, SystemRunner,
};
pub use platform::{default_python_program, is_ci, is_ci_with_env};
