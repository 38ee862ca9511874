//! Configuration loading and resolution.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Merging with defaults and overrides in [`settings`]
//!
//! # Example
//!
//! ```
//! use vmf_spawner_setup::config::{load_config, SettingsOverrides, SetupSettings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("vmf-setup.yml"), "entry_point: app.py").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let settings =
//!     SetupSettings::resolve(temp.path(), &config, &SettingsOverrides::default()).unwrap();
//! assert_eq!(settings.entry_point, "app.py");
//! ```
//!
//! # Resolution order
//!
//! 1. Built-in defaults
//! 2. Project config (`vmf-setup.yml`, or the `--config` file)
//! 3. Environment variables (`VMF_SETUP_PYTHON`, `VMF_SETUP_REQUIREMENTS`)
//! 4. Command-line flags

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{load_config, load_config_file, parse_config, project_config_path, CONFIG_FILE_NAME};
pub use schema::SetupConfig;
pub use settings::{SettingsOverrides, SetupSettings};
