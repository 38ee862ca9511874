//! Runtime check result types.

use serde::Serialize;
use std::path::PathBuf;

use super::version::RuntimeVersion;

/// The result of querying the interpreter for its version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuntimeStatus {
    /// The interpreter ran and exited successfully.
    Available {
        /// Program name as invoked.
        program: String,
        /// Resolved location on PATH, when it could be determined.
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
        /// First line the interpreter printed (e.g. `Python 3.11.4`).
        version_line: String,
        /// Parsed version, if the line contained one.
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<RuntimeVersion>,
    },

    /// The interpreter could not be spawned or exited non-zero.
    Missing {
        /// Program name as invoked.
        program: String,
        /// Exit code when the program ran but failed; `None` if it never started.
        #[serde(skip_serializing_if = "Option::is_none")]
        exit_code: Option<i32>,
    },
}

impl RuntimeStatus {
    /// Whether the interpreter is present.
    pub fn is_available(&self) -> bool {
        matches!(self, RuntimeStatus::Available { .. })
    }

    /// The parsed version, if available.
    pub fn version(&self) -> Option<RuntimeVersion> {
        match self {
            RuntimeStatus::Available { version, .. } => *version,
            RuntimeStatus::Missing { .. } => None,
        }
    }
}

/// Outcome of comparing an available interpreter against the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionCompliance {
    /// Version is at or above the minimum.
    Supported,
    /// Version parsed and is below the minimum.
    TooOld,
    /// Version could not be read from the interpreter output.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> RuntimeStatus {
        RuntimeStatus::Available {
            program: "python".to_string(),
            path: None,
            version_line: "Python 3.11.4".to_string(),
            version: RuntimeVersion::extract("3.11.4"),
        }
    }

    #[test]
    fn available_is_available() {
        let status = available();
        assert!(status.is_available());
        assert_eq!(status.version().unwrap().to_string(), "3.11.4");
    }

    #[test]
    fn missing_is_not_available() {
        let status = RuntimeStatus::Missing {
            program: "python".to_string(),
            exit_code: Some(9009),
        };
        assert!(!status.is_available());
        assert!(status.version().is_none());
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(available()).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["version"], "3.11.4");
        assert!(json.get("path").is_none());

        let missing = RuntimeStatus::Missing {
            program: "python".to_string(),
            exit_code: None,
        };
        let json = serde_json::to_value(missing).unwrap();
        assert_eq!(json["status"], "missing");
        assert!(json.get("exit_code").is_none());
    }
}
