//! Platform detection.

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()` so the installer never
/// blocks waiting for a key press. Checks common CI environment variables:
/// `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// Check for CI markers with a custom env var lookup function.
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    const CI_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ];
    CI_VARS.iter().any(|var| env_fn(var).is_ok())
}

/// Default interpreter program name for the current platform.
///
/// Windows installs from python.org register `python`; most Unix
/// distributions only ship `python3`.
pub fn default_python_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}
