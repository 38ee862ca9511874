//! Interpreter detection.
//!
//! # Modules
//!
//! - [`probe`] - PATH lookup for reporting where a program lives
//! - [`version`] - Version parsing and minimum-version comparison
//! - [`status`] - Result types for the runtime-presence check
//! - [`checker`] - The version-query invocation itself

pub mod checker;
pub mod probe;
pub mod status;
pub mod version;

pub use checker::{RuntimeChecker, VERSION_FLAG};
pub use status::{RuntimeStatus, VersionCompliance};
pub use version::RuntimeVersion;
