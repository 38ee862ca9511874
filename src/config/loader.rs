//! Configuration file discovery and loading.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "vmf-setup.yml";

/// Path of the project config file for a project root.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file and parse it into `SetupConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `SetupConfig`.
///
/// An empty document is the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Without one, the project's
/// `vmf-setup.yml` is loaded if present and the defaults are used if not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<SetupConfig> {
    if let Some(override_path) = config_override {
        let path = if override_path.is_absolute() {
            override_path.to_path_buf()
        } else {
            project_root.join(override_path)
        };
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(&path);
    }

    let path = project_config_path(project_root);
    match load_config_file(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(SetupError::ConfigNotFound { .. }) => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(SetupConfig::default())
        }
        Err(e) => Err(e),
    }
}
