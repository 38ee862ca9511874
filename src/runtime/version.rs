//! Interpreter version parsing and comparison.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A `major.minor[.patch]` version.
///
/// A missing patch component compares lower than any explicit patch, so
/// `3.8` <= `3.8.0`. Minimum versions are written without a patch, which
/// makes [`RuntimeVersion::meets`] the useful comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl RuntimeVersion {
    /// Create a version without a patch component.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Extract the first version number from interpreter output.
    ///
    /// Accepts lines such as `Python 3.11.4`, `Python 3.13.0rc1`
    /// or `3.9`. Returns `None` when no `N.N` pattern is present.
    pub fn extract(text: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(text)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// Whether this version satisfies `minimum` on major and minor.
    pub fn meets(&self, minimum: &RuntimeVersion) -> bool {
        (self.major, self.minor) >= (minimum.major, minimum.minor)
            && (minimum.patch.is_none()
                || (self.major, self.minor) > (minimum.major, minimum.minor)
                || self.patch.unwrap_or(0) >= minimum.patch.unwrap_or(0))
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for RuntimeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Self::extract(trimmed) {
            Some(v) if v.to_string() == trimmed => Ok(v),
            _ => Err(format!(
                "invalid version '{}': expected MAJOR.MINOR or MAJOR.MINOR.PATCH",
                s
            )),
        }
    }
}

impl Serialize for RuntimeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
