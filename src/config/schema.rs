//! Configuration schema definitions.
//!
//! This module contains the struct that maps to the optional
//! `vmf-setup.yml` project file.

use crate::runtime::RuntimeVersion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default application name shown in the header.
pub const DEFAULT_APP_NAME: &str = "VMF Spawner";

/// Default dependency manifest, relative to the project root.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Default minimum interpreter version.
pub const DEFAULT_MINIMUM_PYTHON: RuntimeVersion = RuntimeVersion::new(3, 8);

/// Default application entry point, used in the usage hint.
pub const DEFAULT_ENTRY_POINT: &str = "main.py";

/// Root configuration structure for `vmf-setup.yml`.
///
/// Every key is optional; unset keys fall back to built-in defaults when
/// settings are resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Application name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Interpreter program to invoke
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Dependency manifest path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<PathBuf>,

    /// Minimum supported interpreter version, e.g. "3.8"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_python: Option<String>,

    /// Script that launches the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,

    /// Wait for a key press before exiting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,
}
