//! VMF Spawner setup - first-run installer for the VMF Spawner tool.
//!
//! Verifies that a Python interpreter is reachable, installs the
//! application's dependencies from its requirements manifest, tells the
//! user how to launch the application and waits for a key press.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `vmf-setup.yml` loading and settings resolution
//! - [`error`] - Error types and result aliases
//! - [`process`] - Subprocess execution and platform detection
//! - [`runtime`] - Interpreter lookup, version query and parsing
//! - [`setup`] - The installation procedure
//! - [`ui`] - Spinners, themed output and the exit pause
//!
//! # Example
//!
//! ```
//! use vmf_spawner_setup::runtime::RuntimeVersion;
//!
//! let found = RuntimeVersion::extract("Python 3.11.4").unwrap();
//! assert!(found.meets(&RuntimeVersion::new(3, 8)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod runtime;
pub mod setup;
pub mod ui;

pub use error::{Result, SetupError};
