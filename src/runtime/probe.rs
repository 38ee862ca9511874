//! Locating programs on the search path.
//!
//! The spawn result of the version query is what decides whether the
//! interpreter is present. The lookup here only reports *where* the
//! program was found, for `check` output and debug logs.
//!
//! # Example
//!
//! ```no_run
//! use vmf_spawner_setup::runtime::probe::{parse_system_path, resolve_program};
//!
//! if let Some(path) = resolve_program("python3", &parse_system_path()) {
//!     println!("python3 is {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Executable extensions to try when a program name has none.
///
/// Reads `PATHEXT` on Windows; empty elsewhere.
pub fn executable_extensions() -> Vec<String> {
    if cfg!(windows) {
        parse_pathext(std::env::var("PATHEXT").ok().as_deref())
    } else {
        Vec::new()
    }
}

/// Split a `PATHEXT` value, falling back to the Windows defaults.
pub fn parse_pathext(value: Option<&str>) -> Vec<String> {
    let raw = value.unwrap_or(".COM;.EXE;.BAT;.CMD");
    raw.split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
        .collect()
}

/// Resolve a program's path by iterating over PATH entries.
///
/// A program given with a directory component (e.g. `./venv/bin/python`)
/// is checked as-is. Otherwise returns the first PATH entry holding an
/// executable file of that name, trying each of `executable_extensions()`
/// in turn. Does NOT use `which`/`where`; their behavior varies across
/// systems.
pub fn resolve_program(program: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    resolve_program_with_extensions(program, path_entries, &executable_extensions())
}

/// [`resolve_program`] with an explicit extension list.
pub fn resolve_program_with_extensions(
    program: &str,
    path_entries: &[PathBuf],
    extensions: &[String],
) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        return candidates(as_path, extensions)
            .into_iter()
            .find(|c| c.is_file() && is_executable(c));
    }

    for dir in path_entries {
        let base = dir.join(program);
        if let Some(found) = candidates(&base, extensions)
            .into_iter()
            .find(|c| c.is_file() && is_executable(c))
        {
            return Some(found);
        }
    }
    None
}

/// Anchor a relative program path with a directory component to `base`.
///
/// Bare names such as `python3` and absolute paths are returned unchanged.
/// Both the version query and the installer then start the same file no
/// matter which working directory they run in.
pub fn anchor_program(program: &str, base: &Path) -> String {
    let as_path = Path::new(program);
    if as_path.is_absolute() || as_path.components().count() < 2 {
        return program.to_string();
    }
    base.join(as_path).to_string_lossy().into_owned()
}

fn candidates(base: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut out = vec![base.to_path_buf()];
    if base.extension().is_none() {
        for ext in extensions {
            let mut name = base.as_os_str().to_os_string();
            name.push(ext);
            out.push(PathBuf::from(name));
        }
    }
    out
}
