//! The installation procedure and its dependency-installation step.
//!
//! - [`procedure`] - Runtime check, install, completion notice, pause
//! - [`installer`] - Package-manager invocation against the manifest

pub mod installer;
pub mod procedure;

pub use installer::{DependencyInstaller, InstallReport};
pub use procedure::{SetupOutcome, SetupProcedure, RUNTIME_NAME};
