//! Database version handling and version-gated syntax.
//!
//! The configured version is read on every generation call. An unknown
//! version (unset, `0` or empty) is treated as a modern server, so gated
//! features are assumed available.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::dialect::{Dialect, ExistenceGuard};
use crate::error::{DdlError, Result};

static VERSION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*v?(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("version pattern is valid")
});

/// The version of the database server the SQL is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawVersion", into = "RawVersion")]
pub enum DatabaseVersion {
    /// Version not configured or not probed yet.
    #[default]
    Unknown,
    /// A known server version.
    Known(Version),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawVersion {
    Number(u64),
    Text(String),
}

impl TryFrom<RawVersion> for DatabaseVersion {
    type Error = DdlError;

    fn try_from(raw: RawVersion) -> Result<Self> {
        match raw {
            RawVersion::Number(n) => Ok(Self::from(n)),
            RawVersion::Text(s) => Self::parse(&s),
        }
    }
}

impl From<DatabaseVersion> for RawVersion {
    fn from(version: DatabaseVersion) -> Self {
        match version {
            DatabaseVersion::Unknown => Self::Number(0),
            DatabaseVersion::Known(v) => Self::Text(v.to_string()),
        }
    }
}

impl DatabaseVersion {
    /// Parses a server-reported version.
    ///
    /// Missing minor/patch components default to zero and trailing vendor
    /// suffixes are ignored, so `"9.1"` and `"8.0.32-log"` both parse.
    /// Empty strings and all-zero versions mean [`DatabaseVersion::Unknown`].
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::Unknown);
        }

        let captures = VERSION_PREFIX
            .captures(raw)
            .ok_or_else(|| DdlError::InvalidVersion {
                raw: raw.to_string(),
                message: "expected MAJOR[.MINOR[.PATCH]]".to_string(),
            })?;

        let component = |idx: usize| -> Result<u64> {
            captures.get(idx).map_or(Ok(0), |m| {
                m.as_str().parse().map_err(|e| DdlError::InvalidVersion {
                    raw: raw.to_string(),
                    message: format!("{e}"),
                })
            })
        };

        let version = Version::new(component(1)?, component(2)?, component(3)?);
        if version == Version::new(0, 0, 0) {
            Ok(Self::Unknown)
        } else {
            Ok(Self::Known(version))
        }
    }

    /// Returns the known version, if any.
    #[must_use]
    pub const fn known(&self) -> Option<&Version> {
        match self {
            Self::Unknown => None,
            Self::Known(v) => Some(v),
        }
    }

    /// Returns `true` unless the version is known to be older than `minimum`.
    #[must_use]
    pub fn at_least(&self, minimum: &Version) -> bool {
        self.known().is_none_or(|v| v >= minimum)
    }
}

impl From<u64> for DatabaseVersion {
    fn from(major: u64) -> Self {
        if major == 0 {
            Self::Unknown
        } else {
            Self::Known(Version::new(major, 0, 0))
        }
    }
}

impl From<Version> for DatabaseVersion {
    fn from(version: Version) -> Self {
        Self::Known(version)
    }
}

impl FromStr for DatabaseVersion {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DatabaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Known(v) => write!(f, "{v}"),
        }
    }
}

/// Whether `dialect` can use `CREATE TABLE IF NOT EXISTS` at `version`.
///
/// Dialects that guard creation structurally (mssql, ibmi) never use the
/// keyword. Dialects with a minimum version compare against it; the rest
/// always support it.
#[must_use]
pub fn supports_if_not_exists(dialect: Dialect, version: &DatabaseVersion) -> bool {
    let descriptor = dialect.descriptor();
    if descriptor.existence_guard != ExistenceGuard::IfNotExists {
        return false;
    }
    descriptor
        .if_not_exists_since
        .is_none_or(|(major, minor, patch)| version.at_least(&Version::new(major, minor, patch)))
}
