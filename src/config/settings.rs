//! Resolved settings.
//!
//! Settings combine built-in defaults, the project config file, and
//! command-line/environment overrides (later wins).

use crate::config::schema::{
    SetupConfig, DEFAULT_APP_NAME, DEFAULT_ENTRY_POINT, DEFAULT_MINIMUM_PYTHON,
    DEFAULT_REQUIREMENTS,
};
use crate::error::{Result, SetupError};
use crate::process::default_python_program;
use crate::runtime::probe::anchor_program;
use crate::runtime::RuntimeVersion;
use std::path::{Path, PathBuf};

/// Values supplied on the command line or through environment variables.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub python: Option<String>,
    pub requirements: Option<PathBuf>,
    pub no_pause: bool,
    pub strict: bool,
    /// Directory the installer was started from; a relative `python`
    /// override is anchored here.
    pub invocation_dir: Option<PathBuf>,
}

/// Fully resolved settings for a setup run.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupSettings {
    /// Directory the installer runs in; holds the manifest and entry point.
    pub project_root: PathBuf,
    /// Name shown in the header.
    pub app_name: String,
    /// Interpreter program. A path with a directory component is absolute.
    pub python: String,
    /// Manifest path as configured (relative paths are relative to `project_root`).
    pub requirements: PathBuf,
    /// Minimum supported interpreter version.
    pub minimum_python: RuntimeVersion,
    /// Script that launches the application.
    pub entry_point: String,
    /// Wait for a key press before exiting.
    pub pause: bool,
    /// Treat an installer failure as fatal.
    pub strict: bool,
}

impl SetupSettings {
    /// Resolve settings from config and overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for an unparsable minimum version or
    /// an empty interpreter/manifest value.
    ///
    /// A relative interpreter path such as `./venv/bin/python` is made
    /// absolute: against `invocation_dir` when it came from a flag or
    /// environment variable, against `project_root` when it came from the
    /// config file.
    pub fn resolve(
        project_root: &Path,
        config: &SetupConfig,
        overrides: &SettingsOverrides,
    ) -> Result<Self> {
        let python = match (&overrides.python, &config.python) {
            (Some(program), _) => match &overrides.invocation_dir {
                Some(dir) => anchor_program(program, dir),
                None => program.clone(),
            },
            (None, Some(program)) => anchor_program(program, project_root),
            (None, None) => default_python_program().to_string(),
        };
        if python.trim().is_empty() {
            return Err(SetupError::ConfigValidationError {
                message: "python must not be empty".to_string(),
            });
        }

        let requirements = overrides
            .requirements
            .clone()
            .or_else(|| config.requirements.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS));
        if requirements.as_os_str().is_empty() {
            return Err(SetupError::ConfigValidationError {
                message: "requirements must not be empty".to_string(),
            });
        }

        let minimum_python = match config.minimum_python.as_deref() {
            Some(text) => text.parse::<RuntimeVersion>().map_err(|message| {
                SetupError::ConfigValidationError {
                    message: format!("minimum_python: {}", message),
                }
            })?,
            None => DEFAULT_MINIMUM_PYTHON,
        };

        Ok(Self {
            project_root: project_root.to_path_buf(),
            app_name: config
                .app_name
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            python,
            requirements,
            minimum_python,
            entry_point: config
                .entry_point
                .clone()
                .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string()),
            pause: config.pause.unwrap_or(true) && !overrides.no_pause,
            strict: overrides.strict,
        })
    }

    /// Defaults for a project root, with no config file or overrides.
    pub fn defaults(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            app_name: DEFAULT_APP_NAME.to_string(),
            python: default_python_program().to_string(),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            minimum_python: DEFAULT_MINIMUM_PYTHON,
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            pause: true,
            strict: false,
        }
    }

    /// The command a user runs to start the application.
    pub fn launch_command(&self) -> String {
        format!("{} {}", self.python, self.entry_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/project")
    }

    #[test]
    fn defaults_without_config() {
        let settings =
            SetupSettings::resolve(&root(), &SetupConfig::default(), &Default::default())
                .unwrap();
        assert_eq!(settings, SetupSettings::defaults(&root()));
        assert_eq!(settings.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(settings.minimum_python.to_string(), "3.8");
        assert!(settings.pause);
        assert!(!settings.strict);
    }

    #[test]
    fn config_overrides_defaults() {
        let config = SetupConfig {
            app_name: Some("Spawner".to_string()),
            python: Some("py".to_string()),
            minimum_python: Some("3.10".to_string()),
            entry_point: Some("app.py".to_string()),
            pause: Some(false),
            ..Default::default()
        };
        let settings = SetupSettings::resolve(&root(), &config, &Default::default()).unwrap();
        assert_eq!(settings.app_name, "Spawner");
        assert_eq!(settings.python, "py");
        assert_eq!(settings.minimum_python, RuntimeVersion::new(3, 10));
        assert_eq!(settings.launch_command(), "py app.py");
        assert!(!settings.pause);
    }

    #[test]
    fn overrides_beat_config() {
        let config = SetupConfig {
            python: Some("py".to_string()),
            requirements: Some(PathBuf::from("a.txt")),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            python: Some("python3.12".to_string()),
            requirements: Some(PathBuf::from("b.txt")),
            no_pause: true,
            strict: true,
            invocation_dir: None,
        };
        let settings = SetupSettings::resolve(&root(), &config, &overrides).unwrap();
        assert_eq!(settings.python, "python3.12");
        assert_eq!(settings.requirements, PathBuf::from("b.txt"));
        assert!(!settings.pause);
        assert!(settings.strict);
    }

    #[test]
    fn default_minimum_follows_constant() {
        let settings = SetupSettings::defaults(&root());
        assert_eq!(settings.minimum_python, DEFAULT_MINIMUM_PYTHON);
    }

    #[test]
    fn relative_python_override_is_anchored_to_invocation_dir() {
        let overrides = SettingsOverrides {
            python: Some("./py".to_string()),
            invocation_dir: Some(PathBuf::from("/caller")),
            ..Default::default()
        };
        let settings =
            SetupSettings::resolve(&root(), &SetupConfig::default(), &overrides).unwrap();
        assert_eq!(PathBuf::from(&settings.python), Path::new("/caller").join("./py"));
    }

    #[test]
    fn relative_python_in_config_is_anchored_to_project_root() {
        let config = SetupConfig {
            python: Some("venv/bin/python".to_string()),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            invocation_dir: Some(PathBuf::from("/caller")),
            ..Default::default()
        };
        let settings = SetupSettings::resolve(&root(), &config, &overrides).unwrap();
        assert_eq!(
            PathBuf::from(&settings.python),
            root().join("venv/bin/python")
        );
    }

    #[test]
    fn bare_python_name_is_not_anchored() {
        let overrides = SettingsOverrides {
            python: Some("python3.12".to_string()),
            invocation_dir: Some(PathBuf::from("/caller")),
            ..Default::default()
        };
        let settings =
            SetupSettings::resolve(&root(), &SetupConfig::default(), &overrides).unwrap();
        assert_eq!(settings.python, "python3.12");
    }

    #[test]
    fn invalid_minimum_is_validation_error() {
        let config = SetupConfig {
            minimum_python: Some("latest".to_string()),
            ..Default::default()
        };
        let err = SetupSettings::resolve(&root(), &config, &Default::default()).unwrap_err();
        assert!(matches!(err, SetupError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("minimum_python"));
    }

    #[test]
    fn empty_python_is_validation_error() {
        let overrides = SettingsOverrides {
            python: Some("  ".to_string()),
            ..Default::default()
        };
        let err =
            SetupSettings::resolve(&root(), &SetupConfig::default(), &overrides).unwrap_err();
        assert!(err.to_string().contains("python must not be empty"));
    }
}
